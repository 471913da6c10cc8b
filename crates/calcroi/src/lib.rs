//! calcroi library: configuration, mode dispatch and exit codes.

pub mod app;
pub mod config;
pub mod errors;
