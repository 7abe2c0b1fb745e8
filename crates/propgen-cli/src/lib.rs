//! The `propgen` command-line driver.
pub mod args;
pub mod config;
pub mod driver;
pub mod tracing_config;
