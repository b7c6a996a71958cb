// src/args.rs
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, Command, CommandFactory, FromArgMatches, Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "extgroup",
    version = crate::VERSION,
    about = "Group the files of a directory by extension",
    long_about = "Lists the regular files directly inside DIRECTORY (not recursive), \
                  grouped by extension and sorted alphabetically. Directories and \
                  symlinks are never listed."
)]
pub struct Args {
    /// Directory to scan; when given several times the last one wins
    #[arg(value_name = "DIRECTORY", value_hint = ValueHint::DirPath)]
    pub paths: Vec<PathBuf>,

    /// Include hidden files (names starting with '.')
    #[arg(long)]
    pub include_hidden: bool,

    /// Print the scan settings and a file count per group
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Args {
    /// Parses `argv` (program name first), treating every token that does not
    /// name one of our options as a directory, even when it starts with `-`.
    ///
    /// # Errors
    /// Returns clap's error for `--help`/`--version` (exit 0) and for a
    /// malformed known option such as `--format` without a value.
    pub fn parse_lenient<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut cmd = Self::command();
        cmd.build();
        let argv = split_known_options(&cmd, argv.into_iter().map(Into::into));
        let matches = cmd.try_get_matches_from(argv)?;
        Self::from_arg_matches(&matches)
    }
}

/// Moves known options to the front and everything else behind a `--`, so
/// clap never sees an unknown option.
fn split_known_options(cmd: &Command, mut argv: impl Iterator<Item = OsString>) -> Vec<OsString> {
    let mut options: Vec<OsString> = argv.next().into_iter().collect();
    let mut paths = Vec::new();

    while let Some(token) = argv.next() {
        let pending_value = match token.to_str() {
            Some("--") => {
                paths.extend(argv.by_ref());
                break;
            }
            Some(text) => lookup_option(cmd, text),
            None => None,
        };

        match pending_value {
            Some(takes_value) => {
                options.push(token);
                if takes_value {
                    options.extend(argv.next());
                }
            }
            None => paths.push(token),
        }
    }

    options.push(OsString::from("--"));
    options.extend(paths);
    options
}

/// `Some(takes_value)` when `token` is one of `cmd`'s options; `takes_value`
/// is set if its value is the next token.
fn lookup_option(cmd: &Command, token: &str) -> Option<bool> {
    if let Some(long) = token.strip_prefix("--") {
        let (name, inline) = long.split_once('=').map_or((long, false), |(n, _)| (n, true));
        let arg = cmd.get_arguments().find(|a| a.get_long() == Some(name))?;
        return Some(!inline && takes_value(arg));
    }

    let short = token.strip_prefix('-')?;
    let mut chars = short.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let arg = cmd.get_arguments().find(|a| a.get_short() == Some(c))?;
    Some(takes_value(arg))
}

fn takes_value(arg: &Arg) -> bool {
    arg.get_num_args().is_some_and(|n| n.takes_values())
}
