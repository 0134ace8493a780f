//! CLI module
//!
//! Command-line interface for the control-plane API.
//!
//! # Commands
//!
//! - `endpoints` - Print the endpoint table
//! - `call` - Call one endpoint
//! - `list` - Page through a list endpoint
//! - `jobs` - List ingestion jobs

mod commands;
mod runner;

pub use commands::{parse_key_val, Cli, Commands, OutputFormat};
pub use runner::Runner;
