//! Read-only browse operations over the loaded spellbooks.
//!
//! Results borrow from the catalog and keep load order. Nothing here prints;
//! the session renders views through [`crate::display`].

use crate::catalog::{Spell, Spellbook};
use crate::policy::{AccessPolicy, Effect};
use tracing::debug;

#[derive(Debug)]
/// A spellbook as seen through an access policy.
pub struct SpellbookView<'a> {
    pub book: &'a Spellbook,
    pub visible: Vec<&'a Spell>,
}

impl<'a> SpellbookView<'a> {
    /// Filter a spellbook, or `None` when the policy hides every spell.
    pub fn new(book: &'a Spellbook, policy: AccessPolicy) -> Option<Self> {
        let visible: Vec<&Spell> = book
            .spells()
            .iter()
            .filter(|spell| policy.allows(spell))
            .collect();
        if visible.is_empty() {
            return None;
        }
        Some(Self { book, visible })
    }

    pub fn num_visible(&self) -> usize {
        self.visible.len()
    }

    /// The load-time mean over all spells, hidden ones included.
    pub fn avg_success_rate(&self) -> f64 {
        self.book.avg_success_rate()
    }
}

#[derive(Debug)]
pub struct TitleSearch<'a> {
    /// Spellbooks whose title matched, before any filtering.
    pub matched: usize,
    pub views: Vec<SpellbookView<'a>>,
}

impl TitleSearch<'_> {
    pub fn is_not_found(&self) -> bool {
        self.matched == 0
    }
}

pub fn list_all(books: &[Spellbook], policy: AccessPolicy) -> Vec<SpellbookView<'_>> {
    let views: Vec<_> = books
        .iter()
        .filter_map(|book| SpellbookView::new(book, policy))
        .collect();
    debug!(total = books.len(), shown = views.len(), "listed spellbooks");
    views
}

/// Exact, case-sensitive title match. Titles are not unique, so every match
/// is returned.
pub fn find_by_title<'a>(
    books: &'a [Spellbook],
    title: &str,
    policy: AccessPolicy,
) -> TitleSearch<'a> {
    let matches: Vec<&Spellbook> = books.iter().filter(|book| book.title == title).collect();
    let matched = matches.len();
    let views = matches
        .into_iter()
        .filter_map(|book| SpellbookView::new(book, policy))
        .collect();
    debug!(title, matched, "searched spellbooks by title");
    TitleSearch { matched, views }
}

/// Every visible spell with the given effect, book by book in load order.
pub fn find_by_effect(books: &[Spellbook], effect: Effect, policy: AccessPolicy) -> Vec<&Spell> {
    let spells: Vec<&Spell> = books
        .iter()
        .flat_map(|book| book.spells())
        .filter(|spell| spell.effect == effect.as_str() && policy.allows(spell))
        .collect();
    debug!(effect = effect.as_str(), found = spells.len(), "searched spells by effect");
    spells
}
