//! Type-safe wrappers and enums shared by the CLI and the library.

pub mod field;
pub mod ids;
pub mod sport;
