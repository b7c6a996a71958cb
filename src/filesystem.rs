// src/filesystem.rs
use crate::classify::EntryKind;
use crate::error::{AppError, Result};
use std::fs;
use std::path::Path;

/// A regular file found by [`scan`], with its extension already extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub name: String,
    pub extension: String,
}

impl ScannedFile {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let extension = extension_of(&name).to_owned();
        Self { name, extension }
    }
}

/// Returns the suffix starting at the last `.` of `name`, or `""`.
///
/// A dot in first position marks a hidden file, not an extension, so
/// `.bashrc` has no extension while `archive.tar.gz` yields `.gz`.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx..],
        _ => "",
    }
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Lists the regular files directly inside `dir`.
///
/// Entries come back in the order the OS yields them. Directories, symlinks
/// and special files are skipped, as are hidden files unless
/// `include_hidden` is set.
///
/// # Errors
/// Returns [`AppError::DirectoryOpen`] if `dir` cannot be opened as a
/// directory, and [`AppError::Iteration`] if reading any entry fails. No
/// partial listing is returned in either case.
pub fn scan(dir: &Path, include_hidden: bool) -> Result<Vec<ScannedFile>> {
    let entries = fs::read_dir(dir).map_err(|source| AppError::DirectoryOpen {
        path: dir.to_path_buf(),
        source,
    })?;

    let iteration_error = |source| AppError::Iteration {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(iteration_error)?;
        let kind = EntryKind::from(entry.file_type().map_err(iteration_error)?);

        let raw_name = entry.file_name();
        let name = match raw_name.to_str() {
            Some(s) => s.to_owned(),
            None => {
                let lossy = raw_name.to_string_lossy().into_owned();
                tracing::warn!("non UTF-8 file name in {}: {lossy}", dir.display());
                lossy
            }
        };

        if !kind.is_file() {
            tracing::debug!(?kind, name = %name, "skipping entry");
            continue;
        }
        if !include_hidden && is_hidden(&name) {
            tracing::debug!(name = %name, "skipping hidden file");
            continue;
        }

        files.push(ScannedFile::new(name));
    }

    tracing::debug!(count = files.len(), dir = %dir.display(), "scan finished");
    Ok(files)
}
