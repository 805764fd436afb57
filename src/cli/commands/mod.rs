//! CLI command implementations.

mod config;
mod convert;

pub use config::run_config;
pub use convert::run_convert;
