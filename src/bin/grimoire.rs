//! Interactive spellbook browser.
//!
//! Loads the wizard roster and spellbook catalog, asks for an ID and password
//! (three tries), then runs the browse menu on stdin/stdout until the wizard
//! quits. File paths come from `--wizards`/`--spellbooks` (or
//! `GRIMOIRE_WIZARDS`/`GRIMOIRE_SPELLBOOKS`) and are prompted for otherwise.
//! Logs go to stderr so they never interleave with the transcript.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grimoire::config::{ENV_SPELLBOOK_FILE, ENV_WIZARD_FILE};
use grimoire::{SessionConfig, SessionOutcome};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "grimoire")]
#[command(about = "Log in as a wizard and browse the spellbook catalog")]
struct Cli {
    /// Wizard roster file; prompted for when omitted.
    #[arg(long, env = ENV_WIZARD_FILE)]
    wizards: Option<PathBuf>,
    /// Spellbook catalog file; prompted for when omitted.
    #[arg(long, env = ENV_SPELLBOOK_FILE)]
    spellbooks: Option<PathBuf>,
    /// Log verbosity on stderr. RUST_LOG takes precedence when set.
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(outcome) if outcome.is_success() => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<SessionOutcome> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    let config = SessionConfig::new(cli.wizards, cli.spellbooks);
    let stdin = io::stdin();
    let stdout = io::stdout();
    grimoire::run(&config, stdin.lock(), BufWriter::new(stdout.lock()))
        .context("grimoire session failed")
}
