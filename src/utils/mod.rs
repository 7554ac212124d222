pub mod config;
pub mod errors;

pub use errors::*;
