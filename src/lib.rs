//! Grimoire: a console librarian for wizard spellbooks.
//!
//! The crate loads a wizard roster and a spellbook catalog from flat text
//! files, logs a wizard in, and serves three read-only browse operations with
//! a student-safe view. The data layers (`catalog`, `auth`, `policy`,
//! `query`, `export`) never touch the console; `session` is the thin adapter
//! that prompts and prints.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod policy;
pub mod query;
pub mod session;

pub use auth::{LoginAttempts, LoginOutcome, MAX_LOGIN_ATTEMPTS, authenticate};
pub use catalog::{Catalog, Spell, Spellbook, Wizard, load_spellbooks, load_wizards};
pub use config::SessionConfig;
pub use error::{GrimoireError, Result};
pub use export::export_spells;
pub use policy::{AccessPolicy, Effect};
pub use query::{SpellbookView, TitleSearch, find_by_effect, find_by_title, list_all};
pub use session::{Session, SessionOutcome, SessionState, run};
