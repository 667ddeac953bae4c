// Service exports
pub mod postgres;

pub use postgres::{PostgresError, ProfileStore};
