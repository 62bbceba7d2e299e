//! Student access rules.
//!
//! Students never see poison or death spells, and cannot ask for them by
//! effect. Every other position sees the full catalog.

use crate::catalog::{Spell, Wizard};
use crate::error::{GrimoireError, Result};

/// Position title that triggers the restricted view.
pub const RESTRICTED_POSITION: &str = "Student";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Fire,
    Bubble,
    MemoryLoss,
    Poison,
    Death,
}

impl Effect {
    pub const ALL: [Effect; 5] = [
        Effect::Fire,
        Effect::Bubble,
        Effect::MemoryLoss,
        Effect::Poison,
        Effect::Death,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Fire => "fire",
            Effect::Bubble => "bubble",
            Effect::MemoryLoss => "memory_loss",
            Effect::Poison => "poison",
            Effect::Death => "death",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Effect::ALL
            .into_iter()
            .find(|effect| effect.as_str() == value)
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, Effect::Poison | Effect::Death)
    }
}

fn is_restricted_effect(effect: &str) -> bool {
    Effect::parse(effect).is_some_and(|effect| effect.is_restricted())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessPolicy {
    Restricted,
    Unrestricted,
}

impl AccessPolicy {
    pub fn for_wizard(wizard: &Wizard) -> Self {
        if wizard.position == RESTRICTED_POSITION {
            AccessPolicy::Restricted
        } else {
            AccessPolicy::Unrestricted
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, AccessPolicy::Restricted)
    }

    /// Whether a spell is visible under this policy.
    pub fn allows(&self, spell: &Spell) -> bool {
        !(self.is_restricted() && is_restricted_effect(&spell.effect))
    }

    /// Validate a requested search effect.
    ///
    /// Unknown values are rejected for everyone; poison and death are also
    /// rejected for restricted wizards.
    pub fn validate_effect(&self, input: &str) -> Result<Effect> {
        let effect =
            Effect::parse(input).ok_or_else(|| GrimoireError::UnknownEffect(input.to_string()))?;
        if self.is_restricted() && effect.is_restricted() {
            return Err(GrimoireError::RestrictedEffect(input.to_string()));
        }
        Ok(effect)
    }
}
