// src/lib.rs
//! Group the regular files of one directory by extension.
//!
//! The pipeline is [`filesystem::scan`] → [`grouping::ExtensionIndex`] →
//! [`presentation::report`]; [`run`] wires the three together.

pub mod args;
pub mod classify;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod grouping;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::config::Config;
use crate::error::Result;
use crate::grouping::ExtensionIndex;
use std::io::Write;

/// Scans `config.directory` and builds its extension index.
///
/// # Errors
/// Propagates [`error::AppError::DirectoryOpen`] and
/// [`error::AppError::Iteration`] from the scan.
pub fn collect(config: &Config) -> Result<ExtensionIndex> {
    let files = filesystem::scan(&config.directory, config.include_hidden)?;
    Ok(ExtensionIndex::from_files(files))
}

/// Runs a full scan and writes the report to `out`.
///
/// Nothing is written to `out` if the scan fails.
///
/// # Errors
/// Returns the scan error, or an output error if writing the report fails.
pub fn run<W: Write>(config: &Config, out: W) -> Result<()> {
    let index = collect(config)?;
    tracing::debug!(
        groups = index.len(),
        files = index.file_count(),
        "extension index built"
    );
    presentation::report(&index, config, out)
}
