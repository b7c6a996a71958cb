// src/main.rs
use anyhow::Context;
use extgroup::args::Args;
use extgroup::config::Config;
use extgroup::options::OutputFormat;
use extgroup::presentation;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> anyhow::Result<()> {
    if config.verbose {
        // Keep stdout parseable in JSON mode
        let header = match config.format {
            OutputFormat::Text => presentation::write_scan_header(config, io::stdout().lock()),
            OutputFormat::Json => presentation::write_scan_header(config, io::stderr().lock()),
        };
        header.context("failed to print scan settings")?;
    }

    let index = extgroup::collect(config)
        .with_context(|| format!("failed to scan {}", config.directory.display()))?;
    presentation::report(&index, config, io::stdout().lock()).context("failed to write report")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse_lenient(std::env::args_os()).unwrap_or_else(|e| e.exit());
    init_logging();
    let config = Config::from(args);
    tracing::debug!(?config, "starting");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
