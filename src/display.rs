//! Text rendering for the console and export file.

use crate::catalog::{Spell, Wizard};
use crate::query::SpellbookView;
use std::io::{self, Write};

/// Format a number the way C's `%g` does: six significant digits, trailing
/// zeros dropped, and exponent form outside `1e-4..1e6`. A `0.7` loaded from
/// a file prints as `0.7` rather than its binary approximation.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    // Rounding to six digits can carry into the next power of ten, so the
    // exponent is read back from the rounded scientific form.
    let scientific = format!("{value:.5e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if !(-4..6).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        );
    }
    let decimals = (5 - exponent) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(rendered: &str) -> &str {
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered
    }
}

/// `name success_rate effect`, shared by the console and the export file.
pub fn spell_line(spell: &Spell) -> String {
    format!(
        "{} {} {}",
        spell.name,
        format_number(spell.success_rate),
        spell.effect
    )
}

pub fn write_greeting<W: Write>(out: &mut W, wizard: &Wizard) -> io::Result<()> {
    writeln!(out, "Hello, {}.", wizard.name)?;
    writeln!(out, "ID: {}", wizard.id)?;
    writeln!(out, "Status: {}", wizard.position)?;
    writeln!(out, "Beard Length: {}", format_number(wizard.beard_length))
}

/// Header block followed by each visible spell.
pub fn write_spellbook<W: Write>(out: &mut W, view: &SpellbookView<'_>) -> io::Result<()> {
    let book = view.book;
    writeln!(out, "Title: {} | Author: {}", book.title, book.author)?;
    writeln!(
        out,
        "# of pages: {} | Edition: {}",
        book.num_pages, book.edition
    )?;
    writeln!(
        out,
        "# of spells: {} | Average Success Rate: {}",
        view.num_visible(),
        format_number(view.avg_success_rate())
    )?;
    write_spells(out, view.visible.iter().copied())
}

pub fn write_spells<'a, W, I>(out: &mut W, spells: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Spell>,
{
    for spell in spells {
        writeln!(out, "{}", spell_line(spell))?;
    }
    Ok(())
}
