mod utils;
mod value;
