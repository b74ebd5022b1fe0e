pub mod env;
pub mod mail;
pub mod types;
pub mod utils;
