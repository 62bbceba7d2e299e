// End-to-end console sessions driven through in-memory transcripts.
mod support;

use anyhow::Result;
use grimoire::{GrimoireError, SessionConfig, SessionOutcome, run};
use std::fs;
use std::io::Cursor;
use support::{Fixture, read_lines};

fn session(fixture: &Fixture, input: &str) -> Result<(SessionOutcome, String)> {
    let config = SessionConfig::with_paths(&fixture.wizards, &fixture.spellbooks);
    let mut out = Vec::new();
    let outcome = run(&config, Cursor::new(input.to_string()), &mut out)?;
    Ok((outcome, String::from_utf8(out)?))
}

#[test]
fn successful_login_greets_and_quits() -> Result<()> {
    let fixture = Fixture::new()?;
    let (outcome, text) = session(&fixture, "42\nabc\n4\n")?;
    assert_eq!(outcome, SessionOutcome::Quit);
    assert!(text.contains("Hello, Merlin.\nID: 42\nStatus: Headmaster\nBeard Length: 31.5\n"));
    assert!(text.ends_with("Quitting program.\n"));
    Ok(())
}

#[test]
fn three_failures_lock_the_session() -> Result<()> {
    let fixture = Fixture::new()?;
    let (outcome, text) = session(&fixture, "42 wrong\n999 abc\nabc abc\n42 abc\n")?;
    assert_eq!(outcome, SessionOutcome::LockedOut);
    assert_eq!(text.matches("Invalid ID or password.").count(), 3);
    assert!(text.ends_with("Too many invalid attempts- exiting program.\n"));
    assert!(!text.contains("Hello,"));
    Ok(())
}

#[test]
fn two_failures_then_success_continues() -> Result<()> {
    let fixture = Fixture::new()?;
    let (outcome, text) = session(&fixture, "42 wrong\n42 ABC\n42 abc\n4\n")?;
    assert_eq!(outcome, SessionOutcome::Quit);
    assert_eq!(text.matches("Invalid ID or password.").count(), 2);
    assert!(text.contains("Hello, Merlin."));
    Ok(())
}

#[test]
fn student_display_all_hides_restricted_spells() -> Result<()> {
    let fixture = Fixture::new()?;
    let (_, text) = session(&fixture, "7 pw\n1\n4\n")?;
    assert!(text.contains(
        "Title: Embers | Author: Ignatius\n\
         # of pages: 120 | Edition: 2\n\
         # of spells: 2 | Average Success Rate: 0.7\n\
         Flare 0.5 fire\n\
         Blaze 0.9 fire\n"
    ));
    assert!(!text.contains("Doom"));
    assert!(!text.contains("Venom"));
    Ok(())
}

#[test]
fn headmaster_display_all_shows_everything() -> Result<()> {
    let fixture = Fixture::new()?;
    let (_, text) = session(&fixture, "42 abc\n1\n4\n")?;
    assert!(text.contains("# of spells: 3 | Average Success Rate: 0.7\n"));
    assert!(text.contains("Title: Doom | Author: Mordred\n"));
    assert!(text.contains("Wither 0.2 death\n"));
    Ok(())
}

#[test]
fn title_search_reports_missing_and_duplicate_titles() -> Result<()> {
    let fixture = Fixture::new()?;
    let (_, text) = session(&fixture, "42 abc\n2 Nothing\n2 Embers\n4\n")?;
    assert_eq!(text.matches("No spellbook with that title found.").count(), 1);
    assert_eq!(text.matches("Title: Embers").count(), 2);
    assert!(text.contains("Title: Embers | Author: Cinder\n"));
    Ok(())
}

#[test]
fn student_title_match_on_hidden_book_prints_nothing() -> Result<()> {
    let fixture = Fixture::new()?;
    let (_, text) = session(&fixture, "7 pw\n2 Doom\n4\n")?;
    assert!(!text.contains("Title: Doom"));
    assert!(!text.contains("No spellbook with that title found."));
    Ok(())
}

#[test]
fn effect_search_prints_matches_in_load_order() -> Result<()> {
    let fixture = Fixture::new()?;
    let (_, text) = session(&fixture, "42 abc\n3 fire 1\n4\n")?;
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| line.ends_with(" fire"))
        .collect();
    assert_eq!(lines, vec!["Flare 0.5 fire", "Blaze 0.9 fire", "Spark 0.3 fire"]);
    Ok(())
}

#[test]
fn student_cannot_request_poison() -> Result<()> {
    let fixture = Fixture::new()?;
    let (_, text) = session(&fixture, "7 pw\n3 poison ice fire 1\n4\n")?;
    assert_eq!(text.matches("Invalid effect. Try again.").count(), 2);
    assert!(text.contains("Flare 0.5 fire\n"));
    Ok(())
}

#[test]
fn invalid_menu_and_method_choices_reprompt() -> Result<()> {
    let fixture = Fixture::new()?;
    let (outcome, text) = session(&fixture, "42 abc\n0 7 3 bubble 5 1\n4\n")?;
    assert_eq!(outcome, SessionOutcome::Quit);
    assert_eq!(
        text.matches("That is not a valid input. Try again.").count(),
        3
    );
    assert!(text.contains("Pop 0.6 bubble\n"));
    Ok(())
}

#[test]
fn export_appends_and_never_truncates() -> Result<()> {
    let fixture = Fixture::new()?;
    let export = fixture.path("fire.txt");
    fs::write(&export, "kept line\n")?;
    let input = format!(
        "42 abc\n3 fire 2 {path}\n3 fire 2 {path}\n4\n",
        path = export.display()
    );
    let (_, text) = session(&fixture, &input)?;
    assert_eq!(text.matches("Spells copied to file.").count(), 2);

    let lines = read_lines(&export)?;
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "kept line");
    assert_eq!(lines[1..4], lines[4..7]);
    assert_eq!(lines[1], "Flare 0.5 fire");
    Ok(())
}

#[test]
fn failed_export_is_reported_and_session_continues() -> Result<()> {
    let fixture = Fixture::new()?;
    let export = fixture.path("no-such-dir").join("out.txt");
    let input = format!("42 abc\n3 fire 2 {}\n4\n", export.display());
    let (outcome, text) = session(&fixture, &input)?;
    assert_eq!(outcome, SessionOutcome::Quit);
    assert!(text.contains("Error: failed to export spells to"));
    assert!(!text.contains("Spells copied to file."));
    Ok(())
}

#[test]
fn missing_wizard_file_stops_before_prompting_spellbooks() -> Result<()> {
    let fixture = Fixture::new()?;
    let missing = fixture.path("missing.txt");
    let config = SessionConfig::new(Some(missing), None);
    let mut out = Vec::new();
    let outcome = run(&config, Cursor::new("unused\n"), &mut out)?;
    let text = String::from_utf8(out)?;
    assert_eq!(outcome, SessionOutcome::FileNotFound);
    assert_eq!(text, "Error: wizard file not found.\n");
    Ok(())
}

#[test]
fn prompts_for_file_names_when_not_configured() -> Result<()> {
    let fixture = Fixture::new()?;
    let input = format!(
        "{}\n{}\n42 abc\n4\n",
        fixture.wizards.display(),
        fixture.spellbooks.display()
    );
    let mut out = Vec::new();
    let outcome = run(&SessionConfig::default(), Cursor::new(input), &mut out)?;
    let text = String::from_utf8(out)?;
    assert_eq!(outcome, SessionOutcome::Quit);
    assert!(text.starts_with(
        "Enter the wizard info file name: Enter the spellbook info file name: Enter your ID: "
    ));

    let mut out = Vec::new();
    let input = format!("{}\nmissing.txt\n", fixture.wizards.display());
    let outcome = run(&SessionConfig::default(), Cursor::new(input), &mut out)?;
    assert_eq!(outcome, SessionOutcome::FileNotFound);
    assert!(String::from_utf8(out)?.ends_with("Error: spellbook file not found.\n"));
    Ok(())
}

#[test]
fn closed_input_ends_the_session_with_an_error() -> Result<()> {
    let fixture = Fixture::new()?;
    let config = SessionConfig::with_paths(&fixture.wizards, &fixture.spellbooks);
    let err = run(&config, Cursor::new("42 abc\n1\n"), Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, GrimoireError::InputClosed));
    Ok(())
}
