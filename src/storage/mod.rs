//! Storage layer for the ZED Tournaments CLI
//!
//! Keeps what must survive between invocations in SQLite:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Drafts, preferences and the portal session

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::RegistrationDatabase;
