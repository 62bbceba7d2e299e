//! Wizard login.
//!
//! Credentials are matched in plaintext against the roster in file order.
//! [`LoginAttempts`] tracks consecutive failures so the console adapter only
//! has to prompt and report.

use crate::catalog::Wizard;
use crate::error::{GrimoireError, Result};
use tracing::{info, warn};

/// Failed attempts allowed before the session is locked out.
pub const MAX_LOGIN_ATTEMPTS: u32 = 3;

/// Index of the first wizard whose id and password both match exactly.
pub fn authenticate(wizards: &[Wizard], id: i32, password: &str) -> Option<usize> {
    wizards
        .iter()
        .position(|wizard| wizard.id == id && wizard.password == password)
}

/// Like [`authenticate`] but reports a miss as an error.
pub fn verify(wizards: &[Wizard], id: i32, password: &str) -> Result<usize> {
    authenticate(wizards, id, password).ok_or(GrimoireError::AuthenticationFailed)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(usize),
    Rejected { remaining: u32 },
    Locked,
}

#[derive(Debug)]
pub struct LoginAttempts {
    max: u32,
    failures: u32,
}

impl Default for LoginAttempts {
    fn default() -> Self {
        Self::new(MAX_LOGIN_ATTEMPTS)
    }
}

impl LoginAttempts {
    pub fn new(max: u32) -> Self {
        Self { max, failures: 0 }
    }

    pub fn is_locked(&self) -> bool {
        self.failures >= self.max
    }

    /// Check one set of credentials. `id` is `None` when the typed ID was not
    /// a number, which counts as a failed attempt.
    pub fn attempt(&mut self, wizards: &[Wizard], id: Option<i32>, password: &str) -> LoginOutcome {
        if self.is_locked() {
            return LoginOutcome::Locked;
        }

        let matched = id.and_then(|id| verify(wizards, id, password).ok());
        if let Some(index) = matched {
            info!(wizard = %wizards[index].name, "login succeeded");
            return LoginOutcome::Authenticated(index);
        }

        self.failures += 1;
        warn!(attempt = self.failures, max = self.max, "login rejected");
        if self.is_locked() {
            LoginOutcome::Locked
        } else {
            LoginOutcome::Rejected {
                remaining: self.max - self.failures,
            }
        }
    }
}
