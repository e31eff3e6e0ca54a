//! `trino-type`: inspect catalog type descriptors from the command line.
//!
//! The binary is a thin wrapper; argument parsing, output rendering and the
//! commands live here so they can be tested without spawning a process.

pub mod args;
pub mod commands;
mod error;
pub mod output;
pub mod tracing_setup;

pub use error::CliError;
