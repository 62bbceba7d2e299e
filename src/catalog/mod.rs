//! Catalog wiring.
//!
//! This module wraps the two flat files loaded at startup (the wizard roster
//! and the spellbook catalog) so the session can hold one validated snapshot.
//! Types here mirror the file fields; callers use [`Catalog::load`] for the
//! usual open-both-then-parse flow, or the reader-based loaders directly when
//! the data does not live on disk.

pub mod loader;
pub mod model;

pub use loader::{
    load_spellbooks, load_spellbooks_from_path, load_wizards, open_spellbook_file,
    open_wizard_file,
};
pub use model::{Catalog, Spell, Spellbook, Wizard};
