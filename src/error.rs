//! Error types surfaced by playground commands

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that terminate a playground command
///
/// Every variant carries the underlying OS error so the user sees the same
/// diagnostic the operating system reported.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// The source file could not be opened for reading
    #[error("open input: {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination file could not be opened for writing
    #[error("open output: {}: {source}", .path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing failed after both files were open
    #[error("copy failed: {} -> {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the terminal failed
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
