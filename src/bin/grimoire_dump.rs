//! Emit a spellbook catalog as JSON.
//!
//! Usage:
//!   grimoire-dump books.txt
//!   grimoire-dump --student --pretty books.txt
//!
//! Prints one JSON object per spellbook (NDJSON) in file order, or a single
//! pretty-printed array with `--pretty`. `--student` applies the restricted
//! view first, so hidden spells and fully hidden spellbooks are left out. The
//! average success rate always covers every spell in the book.

use anyhow::{Context, Result};
use clap::Parser;
use grimoire::catalog::load_spellbooks_from_path;
use grimoire::{AccessPolicy, SpellbookView, list_all};
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "grimoire-dump")]
#[command(about = "Print a spellbook catalog as JSON")]
struct Cli {
    /// Spellbook catalog file.
    file: PathBuf,
    /// Apply the student view before printing.
    #[arg(long)]
    student: bool,
    /// Print one indented JSON array instead of NDJSON.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let books = load_spellbooks_from_path(&cli.file)
        .with_context(|| format!("loading {}", cli.file.display()))?;
    let policy = if cli.student {
        AccessPolicy::Restricted
    } else {
        AccessPolicy::Unrestricted
    };

    let records: Vec<Value> = list_all(&books, policy).iter().map(view_record).collect();

    if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}", serde_json::to_string(record)?);
        }
    }
    Ok(())
}

fn view_record(view: &SpellbookView<'_>) -> Value {
    let book = view.book;
    json!({
        "title": book.title,
        "author": book.author,
        "num_pages": book.num_pages,
        "edition": book.edition,
        "num_spells": view.num_visible(),
        "avg_success_rate": view.avg_success_rate(),
        "spells": view.visible,
    })
}
