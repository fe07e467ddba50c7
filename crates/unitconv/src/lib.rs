//! unitconv library: application logic behind the `unitconv` binary.

pub mod app;
pub mod config;
pub mod errors;
