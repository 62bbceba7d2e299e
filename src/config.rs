//! Session configuration resolved from flags and environment.

use std::path::PathBuf;

/// Environment variable consulted for the wizard roster path.
pub const ENV_WIZARD_FILE: &str = "GRIMOIRE_WIZARDS";
/// Environment variable consulted for the spellbook catalog path.
pub const ENV_SPELLBOOK_FILE: &str = "GRIMOIRE_SPELLBOOKS";

#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Prompted for when `None`.
    pub wizard_path: Option<PathBuf>,
    /// Prompted for when `None`.
    pub spellbook_path: Option<PathBuf>,
}

impl SessionConfig {
    pub fn new(wizard_path: Option<PathBuf>, spellbook_path: Option<PathBuf>) -> Self {
        Self {
            wizard_path,
            spellbook_path,
        }
    }

    pub fn with_paths(wizard_path: impl Into<PathBuf>, spellbook_path: impl Into<PathBuf>) -> Self {
        Self::new(Some(wizard_path.into()), Some(spellbook_path.into()))
    }
}
