//! Console adapter: prompts, menu loop and the startup sequence.
//!
//! Everything that reads from the user or prints lives here. The session is
//! generic over its input and output so tests can drive it with an in-memory
//! transcript. Input is consumed token by token, so several answers may be
//! typed on one line.

use crate::auth::{LoginAttempts, LoginOutcome};
use crate::catalog::{Catalog, Spellbook, Wizard, open_spellbook_file, open_wizard_file};
use crate::config::SessionConfig;
use crate::display::{write_greeting, write_spellbook, write_spells};
use crate::error::{GrimoireError, Result};
use crate::export::export_spells;
use crate::policy::{AccessPolicy, Effect};
use crate::query::{find_by_effect, find_by_title, list_all};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

const INVALID_CHOICE: &str = "That is not a valid input. Try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Browsing,
    Terminated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayAll,
    SearchTitle,
    SearchEffect,
    Quit,
}

impl MenuChoice {
    fn from_token(token: &str) -> Option<Self> {
        match token.parse::<u32>().ok()? {
            1 => Some(MenuChoice::DisplayAll),
            2 => Some(MenuChoice::SearchTitle),
            3 => Some(MenuChoice::SearchEffect),
            4 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMethod {
    Terminal,
    File,
}

impl DisplayMethod {
    fn from_token(token: &str) -> Option<Self> {
        match token.parse::<u32>().ok()? {
            1 => Some(DisplayMethod::Terminal),
            2 => Some(DisplayMethod::File),
            _ => None,
        }
    }
}

/// How a full run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Quit,
    FileNotFound,
    LockedOut,
}

impl SessionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SessionOutcome::Quit)
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `text` without a newline and wait for the next token.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.next_token()
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GrimoireError::InputClosed);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn resolve_path(&mut self, configured: Option<&PathBuf>, question: &str) -> Result<PathBuf> {
        match configured {
            Some(path) => Ok(path.clone()),
            None => self.prompt(question).map(PathBuf::from),
        }
    }

    /// Open both files (prompting for names that were not configured) and
    /// load the catalog. Returns `None` after reporting a missing file.
    pub fn open_catalog(&mut self, config: &SessionConfig) -> Result<Option<Catalog>> {
        let wizard_path = self.resolve_path(
            config.wizard_path.as_ref(),
            "Enter the wizard info file name: ",
        )?;
        let wizard_file = match open_wizard_file(&wizard_path) {
            Ok(file) => file,
            Err(err) => {
                debug!("{err}");
                self.say("Error: wizard file not found.")?;
                return Ok(None);
            }
        };

        let spellbook_path = self.resolve_path(
            config.spellbook_path.as_ref(),
            "Enter the spellbook info file name: ",
        )?;
        let spellbook_file = match open_spellbook_file(&spellbook_path) {
            Ok(file) => file,
            Err(err) => {
                debug!("{err}");
                self.say("Error: spellbook file not found.")?;
                return Ok(None);
            }
        };

        let catalog = Catalog::from_files(
            (wizard_file, &wizard_path.display().to_string()),
            (spellbook_file, &spellbook_path.display().to_string()),
        )?;
        Ok(Some(catalog))
    }

    /// Prompt for credentials until a wizard matches or attempts run out.
    ///
    /// Returns the index of the authenticated wizard, or `None` once locked.
    pub fn login(&mut self, wizards: &[Wizard]) -> Result<Option<usize>> {
        let mut attempts = LoginAttempts::default();
        loop {
            let id = self.prompt("Enter your ID: ")?;
            let password = self.prompt("Enter your password: ")?;
            match attempts.attempt(wizards, id.parse().ok(), &password) {
                LoginOutcome::Authenticated(index) => return Ok(Some(index)),
                LoginOutcome::Rejected { .. } => self.say("Invalid ID or password.")?,
                LoginOutcome::Locked => {
                    self.say("Invalid ID or password.")?;
                    self.say("Too many invalid attempts- exiting program.")?;
                    return Ok(None);
                }
            }
        }
    }

    pub fn greet(&mut self, wizard: &Wizard) -> Result<()> {
        write_greeting(&mut self.output, wizard)?;
        Ok(())
    }

    /// Run the menu until the wizard quits.
    pub fn browse(&mut self, books: &[Spellbook], policy: AccessPolicy) -> Result<()> {
        let mut state = SessionState::Browsing;
        while state == SessionState::Browsing {
            let choice = self.prompt_menu()?;
            state = self.dispatch(choice, books, policy)?;
        }
        Ok(())
    }

    fn prompt_menu(&mut self) -> Result<MenuChoice> {
        loop {
            self.say("Which option would you like to choose?")?;
            self.say("1 - Display all")?;
            self.say("2 - Search by spellbook name")?;
            self.say("3 - Search by spell effect")?;
            self.say("4 - Quit program")?;
            let token = self.prompt("Your choice: ")?;
            match MenuChoice::from_token(&token) {
                Some(choice) => return Ok(choice),
                None => self.say(INVALID_CHOICE)?,
            }
        }
    }

    fn dispatch(
        &mut self,
        choice: MenuChoice,
        books: &[Spellbook],
        policy: AccessPolicy,
    ) -> Result<SessionState> {
        match choice {
            MenuChoice::DisplayAll => {
                for view in list_all(books, policy) {
                    write_spellbook(&mut self.output, &view)?;
                }
            }
            MenuChoice::SearchTitle => {
                let title = self.prompt("Enter the title of a spellbook: ")?;
                let result = find_by_title(books, &title, policy);
                if result.is_not_found() {
                    self.say("No spellbook with that title found.")?;
                }
                for view in &result.views {
                    write_spellbook(&mut self.output, view)?;
                }
            }
            MenuChoice::SearchEffect => self.search_effect(books, policy)?,
            MenuChoice::Quit => {
                self.say("Quitting program.")?;
                return Ok(SessionState::Terminated);
            }
        }
        Ok(SessionState::Browsing)
    }

    fn prompt_effect(&mut self, policy: AccessPolicy) -> Result<Effect> {
        loop {
            let token = self.prompt("Enter a spell effect: ")?;
            match policy.validate_effect(&token) {
                Ok(effect) => return Ok(effect),
                Err(err) => {
                    debug!("{err}");
                    self.say("Invalid effect. Try again.")?;
                }
            }
        }
    }

    fn prompt_method(&mut self) -> Result<DisplayMethod> {
        loop {
            self.say("How would you like the information displayed?")?;
            self.say("1 - Print info to terminal.")?;
            self.say("2 - Print info to file.")?;
            let token = self.prompt("Your choice: ")?;
            match DisplayMethod::from_token(&token) {
                Some(method) => return Ok(method),
                None => self.say(INVALID_CHOICE)?,
            }
        }
    }

    fn search_effect(&mut self, books: &[Spellbook], policy: AccessPolicy) -> Result<()> {
        let effect = self.prompt_effect(policy)?;
        let method = self.prompt_method()?;
        let spells = find_by_effect(books, effect, policy);

        match method {
            DisplayMethod::Terminal => write_spells(&mut self.output, spells)?,
            DisplayMethod::File => {
                let path = PathBuf::from(self.prompt("Please provide file name: ")?);
                match export_spells(&path, spells) {
                    Ok(_) => self.say("Spells copied to file.")?,
                    Err(err) => self.say(&format!("Error: {err}"))?,
                }
            }
        }
        Ok(())
    }
}

/// Full startup sequence: open files, load, log in, greet, browse.
pub fn run<R: BufRead, W: Write>(
    config: &SessionConfig,
    input: R,
    output: W,
) -> Result<SessionOutcome> {
    let mut session = Session::new(input, output);

    let Some(catalog) = session.open_catalog(config)? else {
        return Ok(SessionOutcome::FileNotFound);
    };
    info!(
        wizards = catalog.wizard_count(),
        spellbooks = catalog.spellbooks.len(),
        "catalog loaded"
    );

    let Some(index) = session.login(&catalog.wizards)? else {
        return Ok(SessionOutcome::LockedOut);
    };
    let Some(wizard) = catalog.wizard(index) else {
        return Err(GrimoireError::AuthenticationFailed);
    };

    session.greet(wizard)?;
    let policy = AccessPolicy::for_wizard(wizard);
    debug!(restricted = policy.is_restricted(), "access policy resolved");
    session.browse(&catalog.spellbooks, policy)?;
    Ok(SessionOutcome::Quit)
}
