pub mod errors;
pub mod notify;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
