// src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
use std::path::PathBuf;

/// Settings for a single run, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub directory: PathBuf,
    pub include_hidden: bool,
    pub verbose: bool,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            include_hidden: false,
            verbose: false,
            format: OutputFormat::default(),
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // Last positional wins
        let directory = args
            .paths
            .into_iter()
            .next_back()
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            directory,
            include_hidden: args.include_hidden,
            verbose: args.verbose,
            format: args.format,
        }
    }
}
