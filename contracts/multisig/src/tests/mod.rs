mod rotation;
mod utils;
