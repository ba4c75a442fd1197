//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// Playground CLI: greet, or copy data/vectors/example.txt into data/results/out.txt
#[derive(Debug, Parser)]
#[command(name = "play-cli", version, disable_help_subcommand = true)]
pub struct Cli {
    /// Playground root (defaults to the build-time root)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Emit debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a greeting
    Hello,

    /// Copy a file byte-for-byte from the vectors dir to the results dir
    Io {
        /// Source file (default: <root>/data/vectors/example.txt)
        #[arg(short, long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Destination file (default: <root>/data/results/out.txt)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print the resolved root, vectors and results directories
    Paths,

    /// Anything else; rejected by the dispatcher
    #[command(external_subcommand)]
    Unknown(Vec<OsString>),
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve to a concrete termcolor choice
    ///
    /// `Auto` only colors when stdout is a terminal.
    pub fn resolve(self, stdout_is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if stdout_is_terminal => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}
