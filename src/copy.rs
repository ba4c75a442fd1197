#![forbid(unsafe_code)]

//! Byte-for-byte file copy
//!
//! The source is opened before the destination is created, so a missing
//! source never creates or truncates the destination. Both handles are owned
//! by this module and closed when they go out of scope, on success and on
//! every early return.

use crate::error::PlaygroundError;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of a successful copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub from: PathBuf,
    pub to: PathBuf,
    /// Number of bytes transferred
    pub bytes: u64,
}

/// Copy every byte of `from` into `to`
///
/// The destination is created if missing and truncated if present. Its
/// parent directory must already exist.
///
/// # Errors
///
/// - [`PlaygroundError::OpenInput`] if `from` cannot be opened
/// - [`PlaygroundError::OpenOutput`] if `to` cannot be opened
/// - [`PlaygroundError::Copy`] if reading or writing fails mid-stream; the
///   destination may then hold a partial copy
pub fn copy_file(from: &Path, to: &Path) -> Result<CopyReport, PlaygroundError> {
    let input = File::open(from).map_err(|source| PlaygroundError::OpenInput {
        path: from.to_path_buf(),
        source,
    })?;

    let output = File::create(to).map_err(|source| PlaygroundError::OpenOutput {
        path: to.to_path_buf(),
        source,
    })?;

    let bytes = stream(input, output).map_err(|source| PlaygroundError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;

    debug!(from = %from.display(), to = %to.display(), bytes, "copy complete");

    Ok(CopyReport {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        bytes,
    })
}

/// Stream all bytes from `reader` into `writer` and flush
fn stream(reader: impl io::Read, writer: impl Write) -> io::Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut writer = BufWriter::new(writer);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(bytes)
}
