//! Flat-file parsers for the wizard and spellbook catalogs.
//!
//! Both formats are a leading record count followed by whitespace-separated
//! fields in a fixed order; line breaks carry no meaning. Any token that fails
//! to parse, or a stream that ends before the declared records are complete,
//! aborts the whole load.

use crate::catalog::{Catalog, Spell, Spellbook, Wizard};
use crate::error::{GrimoireError, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Upper bound on up-front allocation; declared counts come from the file.
const PREALLOC_LIMIT: usize = 1024;

/// Whitespace tokenizer that remembers which line each token came from.
struct Tokens<R> {
    reader: R,
    source_name: String,
    pending: VecDeque<String>,
    line: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R, source_name: &str) -> Self {
        Self {
            reader,
            source_name: source_name.to_string(),
            pending: VecDeque::new(),
            line: 0,
        }
    }

    fn next_token(&mut self, field: &'static str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut buf = String::new();
            let read = self
                .reader
                .read_line(&mut buf)
                .map_err(|err| self.malformed(field, format!("read failed: {err}")))?;
            if read == 0 {
                return Err(self.malformed(field, "unexpected end of input".to_string()));
            }
            self.line += 1;
            self.pending.extend(buf.split_whitespace().map(str::to_string));
        }
    }

    fn parse<T: FromStr>(&mut self, field: &'static str, expected: &str) -> Result<T> {
        let token = self.next_token(field)?;
        token
            .parse::<T>()
            .map_err(|_| self.malformed(field, format!("expected {expected}, found '{token}'")))
    }

    fn string(&mut self, field: &'static str) -> Result<String> {
        self.next_token(field)
    }

    fn count(&mut self, field: &'static str) -> Result<usize> {
        let value: i64 = self.parse(field, "an integer")?;
        usize::try_from(value)
            .map_err(|_| self.malformed(field, format!("count must not be negative, found {value}")))
    }

    /// Number of tokens left after the declared records.
    fn drain_remaining(&mut self) -> usize {
        let mut leftover = self.pending.len();
        self.pending.clear();
        let mut buf = String::new();
        while matches!(self.reader.read_line(&mut buf), Ok(n) if n > 0) {
            leftover += buf.split_whitespace().count();
            buf.clear();
        }
        leftover
    }

    fn malformed(&self, field: &'static str, reason: String) -> GrimoireError {
        GrimoireError::MalformedInput {
            source_name: self.source_name.clone(),
            line: self.line,
            field,
            reason,
        }
    }
}

fn read_wizard<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Wizard> {
    Ok(Wizard {
        name: tokens.string("wizard name")?,
        id: tokens.parse("wizard id", "an integer")?,
        password: tokens.string("wizard password")?,
        position: tokens.string("wizard position")?,
        beard_length: tokens.parse("beard length", "a number")?,
    })
}

fn read_spell<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Spell> {
    Ok(Spell {
        name: tokens.string("spell name")?,
        success_rate: tokens.parse("spell success rate", "a number")?,
        effect: tokens.string("spell effect")?,
    })
}

fn read_spellbook<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Spellbook> {
    let title = tokens.string("spellbook title")?;
    let author = tokens.string("spellbook author")?;
    let num_pages = tokens.parse("page count", "an integer")?;
    let edition = tokens.parse("edition", "an integer")?;
    let num_spells = tokens.count("spell count")?;
    if num_spells == 0 {
        return Err(tokens.malformed(
            "spell count",
            format!("spellbook '{title}' declares no spells"),
        ));
    }

    let mut spells = Vec::with_capacity(num_spells.min(PREALLOC_LIMIT));
    for _ in 0..num_spells {
        spells.push(read_spell(tokens)?);
    }
    Spellbook::new(title, author, num_pages, edition, spells)
}

fn finish<R: BufRead>(tokens: &mut Tokens<R>, kind: &str, count: usize) {
    let leftover = tokens.drain_remaining();
    if leftover > 0 {
        warn!(
            source = %tokens.source_name,
            leftover,
            "ignoring tokens after the declared {kind} records"
        );
    }
    debug!(source = %tokens.source_name, count, "loaded {kind} records");
}

/// Parse a wizard file: a count followed by that many wizard records.
pub fn load_wizards<R: BufRead>(reader: R, source_name: &str) -> Result<Vec<Wizard>> {
    let mut tokens = Tokens::new(reader, source_name);
    let count = tokens.count("wizard count")?;
    let mut wizards = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    for _ in 0..count {
        wizards.push(read_wizard(&mut tokens)?);
    }
    finish(&mut tokens, "wizard", wizards.len());
    Ok(wizards)
}

/// Parse a spellbook file: a count followed by that many spellbooks, each
/// carrying its own inline spell list.
pub fn load_spellbooks<R: BufRead>(reader: R, source_name: &str) -> Result<Vec<Spellbook>> {
    let mut tokens = Tokens::new(reader, source_name);
    let count = tokens.count("spellbook count")?;
    let mut books = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    for _ in 0..count {
        books.push(read_spellbook(&mut tokens)?);
    }
    finish(&mut tokens, "spellbook", books.len());
    Ok(books)
}

/// Open the wizard roster, mapping any failure to `WizardFileNotFound`.
pub fn open_wizard_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| GrimoireError::WizardFileNotFound {
        path: path.to_path_buf(),
        source,
    })
}

/// Open the spellbook catalog, mapping any failure to `SpellbookFileNotFound`.
pub fn open_spellbook_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| GrimoireError::SpellbookFileNotFound {
        path: path.to_path_buf(),
        source,
    })
}

/// Open the spellbook file and parse it.
pub fn load_spellbooks_from_path(path: &Path) -> Result<Vec<Spellbook>> {
    let file = open_spellbook_file(path)?;
    load_spellbooks(BufReader::new(file), &path.display().to_string())
}

impl Catalog {
    /// Open both files, then parse both.
    ///
    /// Neither file is read until both have been opened, so a missing
    /// spellbook file is reported without touching the wizard data.
    pub fn load(wizard_path: &Path, spellbook_path: &Path) -> Result<Self> {
        let wizard_file = open_wizard_file(wizard_path)?;
        let spellbook_file = open_spellbook_file(spellbook_path)?;
        Self::from_files(
            (wizard_file, &wizard_path.display().to_string()),
            (spellbook_file, &spellbook_path.display().to_string()),
        )
    }

    /// Parse two already-opened files, each paired with a name for error
    /// messages.
    pub fn from_files(wizards: (File, &str), spellbooks: (File, &str)) -> Result<Self> {
        let (wizard_file, wizard_name) = wizards;
        let (spellbook_file, spellbook_name) = spellbooks;
        let wizards = load_wizards(BufReader::new(wizard_file), wizard_name)?;
        let spellbooks = load_spellbooks(BufReader::new(spellbook_file), spellbook_name)?;
        Ok(Catalog::new(wizards, spellbooks))
    }
}
