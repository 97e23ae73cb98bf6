//! Subcommand implementations and configuration for the `sod` binary.

pub mod commands;
pub mod config;
pub mod io;

pub use config::{NullModelConfig, RunConfig};
