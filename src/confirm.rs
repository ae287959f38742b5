//! Confirmation gate providers

use std::io::{self, BufRead, Write};

/// Yes/no capability asked before rendering an oversized listing.
///
/// Injected into the presenter so the gate runs under test without a real
/// terminal.
pub trait ConfirmationProvider {
    /// Ask whether `count` items should be shown. `prompt` is the exact
    /// text to present to the user.
    fn confirm(&mut self, prompt: &str, count: usize) -> bool;
}

/// Interactive provider: prints the prompt to stdout, flushes, and blocks
/// on one line of stdin. No timeout, no retries; a failed read counts as a
/// negative answer.
pub struct StdinConfirmer;

impl ConfirmationProvider for StdinConfirmer {
    fn confirm(&mut self, prompt: &str, _count: usize) -> bool {
        let mut stdout = io::stdout();
        if write!(stdout, "{prompt}").and_then(|_| stdout.flush()).is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_affirmative(&answer)
    }
}

/// `y`/`yes` in any case is affirmative; everything else is negative.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
