#![forbid(unsafe_code)]

//! Playground directory layout
//!
//! Derives the `data/vectors` and `data/results` directories from a root.
//! Everything here is a pure path computation: nothing touches the
//! filesystem, so a missing directory is only discovered when a consumer
//! opens a file under it.

use crate::config;
use std::path::{Path, PathBuf};

/// Directory holding shared data under the root
const DATA_DIR: &str = "data";
/// Input vectors, relative to the data directory
const VECTORS_DIR: &str = "vectors";
/// Generated results, relative to the data directory
const RESULTS_DIR: &str = "results";

/// File read by `io` when no input is given
pub const DEFAULT_INPUT_FILE: &str = "example.txt";
/// File written by `io` when no output is given
pub const DEFAULT_OUTPUT_FILE: &str = "out.txt";

/// Describes the layout of a playground on disk
///
/// The root is supplied at construction and kept verbatim; derived paths
/// are computed on demand and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundLayout {
    root: PathBuf,
}

impl PlaygroundLayout {
    /// Creates a layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        PlaygroundLayout { root: root.into() }
    }

    /// Creates a layout rooted at the build-time root
    pub fn from_build_root() -> Self {
        Self::new(config::build_root())
    }

    /// The configured root, exactly as supplied
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/data/vectors`
    pub fn vectors_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR).join(VECTORS_DIR)
    }

    /// `<root>/data/results`
    pub fn results_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR).join(RESULTS_DIR)
    }

    /// Source file used by `io` when no `--input` is given
    pub fn default_input(&self) -> PathBuf {
        self.vectors_dir().join(DEFAULT_INPUT_FILE)
    }

    /// Destination file used by `io` when no `--output` is given
    pub fn default_output(&self) -> PathBuf {
        self.results_dir().join(DEFAULT_OUTPUT_FILE)
    }
}

impl Default for PlaygroundLayout {
    fn default() -> Self {
        Self::from_build_root()
    }
}
