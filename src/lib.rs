//! Read-only queries over an in-memory collection of user records.

pub mod config;
pub mod users;
