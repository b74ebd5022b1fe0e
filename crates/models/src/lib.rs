pub mod available_day;
pub mod booking;
pub mod db;
pub mod errors;
