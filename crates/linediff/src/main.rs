use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use linediff_core::DiffEngine;

mod config;
mod input;
mod output;

use config::{AlgorithmChoice, ColorMode, Config, OutputFormat};

/// Exit code when the documents are identical
const EXIT_SAME: u8 = 0;
/// Exit code when the documents differ
const EXIT_DIFFERENT: u8 = 1;
#[cfg_attr(test, allow(dead_code))]
const EXIT_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "linediff", version)]
#[command(about = "Compare two text documents line by line", long_about = None)]
struct Cli {
    /// Original document (`-` for stdin)
    original: PathBuf,

    /// Modified document (`-` for stdin)
    modified: PathBuf,

    /// Output format. Overrides the config file.
    #[arg(long, short = 'f', value_enum)]
    format: Option<OutputFormat>,

    /// Line classification strategy. Overrides the config file.
    #[arg(long, short = 'a', value_enum)]
    algorithm: Option<AlgorithmChoice>,

    /// When to colour side-by-side output. Overrides the config file.
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Path to a config file. Defaults to <config_dir>/linediff/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose (info-level) logging to stderr.
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Enable debug-level logging to stderr.
    #[arg(long)]
    debug: bool,
}

/// Effective settings after merging flags over the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    algorithm: AlgorithmChoice,
    color: ColorMode,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            format: cli.format.unwrap_or(config.format),
            algorithm: cli.algorithm.unwrap_or(config.algorithm),
            color: cli.color.unwrap_or(config.color),
        }
    }
}

#[cfg(not(test))]
fn main() -> std::process::ExitCode {
    match run_with_args(std::env::args_os()) {
        Ok(code) => std::process::ExitCode::from(code),
        Err(err) => {
            eprintln!("linediff: {err:?}");
            std::process::ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_with_args<I, T>(args: I) -> Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    init_logging(cli.verbose, cli.debug);

    let config = Config::load(cli.config.as_deref()).context("load config")?;
    let settings = Settings::resolve(&cli, &config);
    debug!(?settings, "Resolved settings");

    let original = input::read_text(&cli.original).context("read original document")?;
    let modified = input::read_text(&cli.modified).context("read modified document")?;

    let engine = DiffEngine::new().with_algorithm(settings.algorithm.into());
    let result = engine.diff_strings(&original, &modified);
    let summary = result.summary();
    info!(
        additions = summary.additions,
        deletions = summary.deletions,
        unchanged = summary.unchanged,
        "Compared {} and {}",
        cli.original.display(),
        cli.modified.display()
    );

    let text = output::render(
        &engine,
        settings.format,
        &original,
        &modified,
        &result,
        output::use_color(settings.color),
    )?;
    if !text.is_empty() {
        println!("{text}");
    }

    Ok(if summary.has_changes {
        EXIT_DIFFERENT
    } else {
        EXIT_SAME
    })
}

/// Initialize tracing/logging based on CLI flags.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}
