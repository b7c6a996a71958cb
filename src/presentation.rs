// src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use crate::grouping::{ExtensionGroup, ExtensionIndex};
use crate::options::OutputFormat;
use serde::Serialize;
use std::io::{BufWriter, Write};

pub const NO_FILES_MESSAGE: &str = "No files found in the directory.";

#[derive(Debug, Serialize)]
struct GroupRecord<'a> {
    extension: &'a str,
    label: &'a str,
    files: &'a [&'a str],
    count: usize,
}

impl<'a> From<&'a ExtensionGroup<'a>> for GroupRecord<'a> {
    fn from(group: &'a ExtensionGroup<'a>) -> Self {
        Self {
            extension: group.extension,
            label: group.label(),
            files: &group.files,
            count: group.files.len(),
        }
    }
}

/// Writes the report for `index` to `out`.
///
/// Everything is rendered into one buffer and flushed once, so nothing
/// reaches `out` unsorted.
///
/// # Errors
/// Returns an error if writing or serialising fails.
pub fn report<W: Write>(index: &ExtensionIndex, config: &Config, out: W) -> Result<()> {
    let mut out = BufWriter::new(out);
    let groups = index.sorted_groups();

    match config.format {
        OutputFormat::Text => write_text(&groups, config.verbose, &mut out)?,
        OutputFormat::Json => write_json(&groups, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn write_text<W: Write>(groups: &[ExtensionGroup<'_>], verbose: bool, out: &mut W) -> Result<()> {
    if groups.is_empty() {
        writeln!(out, "{NO_FILES_MESSAGE}")?;
        return Ok(());
    }

    for group in groups {
        writeln!(out, "{}:", group.label())?;
        for name in &group.files {
            writeln!(out, "- {name}")?;
        }
        if verbose {
            writeln!(out, "Total files: {}", group.files.len())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_json<W: Write>(groups: &[ExtensionGroup<'_>], out: &mut W) -> Result<()> {
    let records: Vec<GroupRecord<'_>> = groups.iter().map(GroupRecord::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

/// The two startup lines printed in verbose mode.
pub fn write_scan_header<W: Write>(config: &Config, mut out: W) -> Result<()> {
    writeln!(out, "Scanning directory: {}", config.directory.display())?;
    writeln!(out, "Include hidden files: {}", config.include_hidden)?;
    out.flush()?;
    Ok(())
}
