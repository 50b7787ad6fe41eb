//! CLI command implementations.

pub mod common;
pub mod models;
pub mod profile;
pub mod report;
pub mod watch;
