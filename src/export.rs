//! Append-only export of spell search results.

use crate::catalog::Spell;
use crate::display::spell_line;
use crate::error::{GrimoireError, Result};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{error, info};

/// Append one line per spell to `path`, creating the file if needed.
///
/// Existing content is never truncated. Returns the number of lines written.
pub fn export_spells<'a, I>(path: &Path, spells: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Spell>,
{
    let wrap = |source: std::io::Error| GrimoireError::Export {
        path: path.to_path_buf(),
        source,
    };

    let written = append_lines(path, spells).map_err(wrap);
    match &written {
        Ok(lines) => info!(path = %path.display(), lines, "exported spells"),
        Err(err) => error!("{err}"),
    }
    written
}

fn append_lines<'a, I>(path: &Path, spells: I) -> std::io::Result<usize>
where
    I: IntoIterator<Item = &'a Spell>,
{
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    let mut lines = 0;
    for spell in spells {
        writeln!(writer, "{}", spell_line(spell))?;
        lines += 1;
    }
    writer.flush()?;
    Ok(lines)
}
