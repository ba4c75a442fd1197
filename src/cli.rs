//! CLI argument parsing and command dispatch

pub mod args;
pub mod dispatch;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command};
pub use dispatch::{EXIT_ERROR, EXIT_SUCCESS, run, run_from_args, run_io};
