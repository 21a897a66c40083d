mod config;
mod error;
mod types;

pub use config::{Config, DbConfig};
pub use error::Error;
pub use types::*;

pub type PropertyId = i32;
pub type BookingId = i64;
pub type AmenityId = i32;
