//! Record types for wizards, spellbooks and spells.
//!
//! Types here are plain carriers. Lookups always go through a single explicit
//! field (id+password, title, effect); nothing compares whole records.

use crate::error::{GrimoireError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
/// A single spell; owned by exactly one spellbook.
pub struct Spell {
    pub name: String,
    pub success_rate: f64,
    pub effect: String,
}

#[derive(Debug, Clone)]
/// A titled collection of spells with a mean success rate fixed at load time.
pub struct Spellbook {
    pub title: String,
    pub author: String,
    pub num_pages: i32,
    pub edition: i32,
    avg_success_rate: f64,
    spells: Vec<Spell>,
}

impl Spellbook {
    /// Build a spellbook and derive its average success rate.
    ///
    /// An empty spell list has no meaningful mean, so it is rejected as
    /// malformed rather than stored with a NaN.
    pub fn new(
        title: String,
        author: String,
        num_pages: i32,
        edition: i32,
        spells: Vec<Spell>,
    ) -> Result<Self> {
        if spells.is_empty() {
            return Err(GrimoireError::MalformedInput {
                source_name: title,
                line: 0,
                field: "spell count",
                reason: "spellbook declares no spells".to_string(),
            });
        }
        let total: f64 = spells.iter().map(|spell| spell.success_rate).sum();
        let avg_success_rate = total / spells.len() as f64;
        Ok(Self {
            title,
            author,
            num_pages,
            edition,
            avg_success_rate,
            spells,
        })
    }

    pub fn num_spells(&self) -> usize {
        self.spells.len()
    }

    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    /// Mean of every spell's success rate, including spells a restricted view
    /// hides.
    pub fn avg_success_rate(&self) -> f64 {
        self.avg_success_rate
    }
}

#[derive(Debug, Clone)]
/// An account allowed to browse the catalog.
pub struct Wizard {
    pub name: String,
    pub id: i32,
    pub password: String,
    pub position: String,
    pub beard_length: f64,
}

#[derive(Debug, Default)]
/// Everything loaded at startup. Both sequences keep file order and never
/// change afterwards.
pub struct Catalog {
    pub wizards: Vec<Wizard>,
    pub spellbooks: Vec<Spellbook>,
}

impl Catalog {
    pub fn new(wizards: Vec<Wizard>, spellbooks: Vec<Spellbook>) -> Self {
        Self {
            wizards,
            spellbooks,
        }
    }

    pub fn wizard_count(&self) -> usize {
        self.wizards.len()
    }

    pub fn wizard(&self, index: usize) -> Option<&Wizard> {
        self.wizards.get(index)
    }
}
