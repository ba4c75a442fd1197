#![forbid(unsafe_code)]

//! Playground: a small CLI over the `data/vectors` / `data/results` layout
//!
//! The crate resolves the playground directory layout under a root, copies
//! files between the vectors and results directories, and prints a greeting.

pub mod cli;
pub mod config;
pub mod copy;
pub mod error;
pub mod layout;
pub mod logging;
pub mod output;

pub use error::PlaygroundError;
pub use layout::PlaygroundLayout;
