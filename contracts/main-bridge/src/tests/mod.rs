mod pause;
mod utils;
mod withdraw;
