//! Error taxonomy shared by the loader, login, query and export layers.
//!
//! Library code returns [`GrimoireError`]; the console adapter reports bad
//! credentials, bad effect input and failed exports in place and lets the
//! rest end the run. Binaries wrap these with `anyhow` context at
//! the process boundary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrimoireError {
    #[error("wizard file '{path}' could not be opened: {source}")]
    WizardFileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("spellbook file '{path}' could not be opened: {source}")]
    SpellbookFileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed input in {source_name} at line {line} while reading {field}: {reason}")]
    MalformedInput {
        source_name: String,
        line: usize,
        field: &'static str,
        reason: String,
    },

    #[error("invalid ID or password")]
    AuthenticationFailed,

    #[error("unknown spell effect '{0}'")]
    UnknownEffect(String),

    #[error("spell effect '{0}' is not available to students")]
    RestrictedEffect(String),

    #[error("failed to export spells to '{path}': {source}")]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("console input closed before the session finished")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GrimoireError>;
