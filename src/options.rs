// src/options.rs
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One block per extension, meant for people
    #[default]
    Text,
    /// Array of `{extension, label, files, count}` objects
    Json,
}
