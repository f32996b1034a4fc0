//! Command implementations for the ZED Tournaments CLI

pub mod admin;
pub mod casino;
pub mod common;
pub mod register;
pub mod sports;
pub mod team;
