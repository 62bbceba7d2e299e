#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const WIZARDS: &str = "\
3
Merlin 42 abc Headmaster 31.5
Tim 7 pw Student 0.25
Morgana 13 hex Professor 2
";

// Embers mixes fire with a poison spell, Doom is entirely poison/death, and
// Embers appears twice so title search has to return both.
pub const SPELLBOOKS: &str = "\
4
Embers Ignatius 120 2 3
Flare 0.5 fire
Venom 0.7 poison
Blaze 0.9 fire
Doom Mordred 66 1 2
Wither 0.2 death
Sting 0.4 poison
Bubbles Pip 12 3 2
Pop 0.6 bubble
Forget 0.8 memory_loss
Embers Cinder 30 1 1
Spark 0.3 fire
";

/// Temporary directory holding a wizard file and a spellbook file.
pub struct Fixture {
    pub dir: TempDir,
    pub wizards: PathBuf,
    pub spellbooks: PathBuf,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        Self::with_contents(WIZARDS, SPELLBOOKS)
    }

    pub fn with_contents(wizards: &str, spellbooks: &str) -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate fixture dir")?;
        let wizard_path = dir.path().join("wizards.txt");
        let spellbook_path = dir.path().join("spellbooks.txt");
        fs::write(&wizard_path, wizards)?;
        fs::write(&spellbook_path, spellbooks)?;
        Ok(Self {
            dir,
            wizards: wizard_path,
            spellbooks: spellbook_path,
        })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to execute {:?}", cmd.get_program()))?;
    if !output.status.success() {
        anyhow::bail!(
            "command {:?} failed with {:?}; stderr: {}",
            cmd.get_program(),
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(contents.lines().map(str::to_string).collect())
}
