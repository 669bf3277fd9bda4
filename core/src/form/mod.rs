//! Code entry form
//!
//! Six single-character cells editing one six-digit code, with focus
//! movement, paste distribution, per-cell error flags and submission to
//! the verification service. All state lives in one [`CodeEntryForm`]
//! value and every event updates it in a single `&mut self` call;
//! rendering is derived from that value alone (see [`render`]).

mod cell;
pub mod client;
pub mod mock;
pub mod render;

#[cfg(test)]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing;
use vc_shared::messages;

use crate::domain::entities::verification_code::{VerificationCode, CODE_LENGTH};

pub use cell::Cell;
pub use client::{ClientError, SubmitOutcome, VerificationClientTrait};

/// 1 to 6 ASCII digits, nothing else
static PASTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,6}$").expect("paste pattern is a valid regex")
});

/// Index of the last cell
const LAST_CELL: usize = CODE_LENGTH - 1;

/// State of the six-cell entry form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeEntryForm {
    cells: [Cell; CODE_LENGTH],
    focus: usize,
    error: Option<&'static str>,
    success: Option<&'static str>,
    pending: bool,
}

impl CodeEntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six cells, left to right
    pub fn cells(&self) -> &[Cell; CODE_LENGTH] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Per-cell error flags
    pub fn cell_errors(&self) -> [bool; CODE_LENGTH] {
        self.cells.map(|cell| cell.has_error())
    }

    /// Filled cells concatenated left to right
    pub fn code(&self) -> String {
        self.cells.iter().filter_map(Cell::value).collect()
    }

    /// Index of the focused cell
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn success(&self) -> Option<&'static str> {
        self.success
    }

    /// A submission has been started and not yet finished
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Text typed into cell `index`.
    ///
    /// The first character replaces the cell's content (an empty `value`
    /// clears it). The cell is flagged unless it now holds a digit, and
    /// focus moves to the next cell only after a digit. Out-of-range
    /// indices are ignored.
    pub fn enter(&mut self, index: usize, value: &str) {
        let Some(cell) = self.cells.get_mut(index) else {
            tracing::debug!(index, "Ignoring input for a cell that does not exist");
            return;
        };

        cell.enter(value.chars().next());
        self.focus = index;
        if cell.is_valid() && index < LAST_CELL {
            self.focus = index + 1;
        }
    }

    /// Backspace pressed in cell `index`: clear it, drop its flag and move
    /// back one cell, whether or not it already was empty.
    pub fn backspace(&mut self, index: usize) {
        let Some(cell) = self.cells.get_mut(index) else {
            tracing::debug!(index, "Ignoring backspace for a cell that does not exist");
            return;
        };

        *cell = Cell::EMPTY;
        self.focus = index.saturating_sub(1);
    }

    /// Text pasted anywhere in the cell group.
    ///
    /// Accepted only when it is 1 to 6 digits; otherwise the paste error is
    /// shown and nothing else changes. An accepted paste overwrites cells
    /// from the first one on, leaves the rest alone, and focuses the last
    /// pasted cell. Returns whether the paste was accepted.
    pub fn paste(&mut self, text: &str) -> bool {
        if !PASTE_PATTERN.is_match(text) {
            tracing::debug!(length = text.chars().count(), "Rejected paste");
            self.error = Some(messages::FORM_INVALID_PASTE);
            return false;
        }

        self.error = None;
        let mut pasted = 0;
        for (cell, c) in self.cells.iter_mut().zip(text.chars()) {
            *cell = Cell::with_char(c);
            pasted += 1;
        }
        self.focus = (pasted - 1).min(LAST_CELL);
        true
    }

    /// First half of submit: clear the messages and check every cell.
    ///
    /// Returns the code to send, or `None` when a cell is empty or not a
    /// digit (each such cell gets flagged and the summary error is shown)
    /// or when a submission is already pending (nothing changes then).
    pub fn begin_submit(&mut self) -> Option<VerificationCode> {
        if self.pending {
            tracing::debug!("Submission already in flight");
            return None;
        }

        self.error = None;
        self.success = None;

        let mut has_error = false;
        for cell in self.cells.iter_mut() {
            has_error |= cell.revalidate();
        }

        let code = if has_error {
            None
        } else {
            self.code().parse::<VerificationCode>().ok()
        };

        match code {
            Some(code) => {
                self.pending = true;
                Some(code)
            }
            None => {
                self.error = Some(messages::FORM_INVALID_CODE);
                None
            }
        }
    }

    /// Second half of submit: reflect the service's answer.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) {
        self.pending = false;

        match outcome {
            SubmitOutcome::Verified => {
                tracing::info!(event = "code_verified", "Verification succeeded");
                self.cells = [Cell::EMPTY; CODE_LENGTH];
                self.focus = 0;
                self.error = None;
                self.success = Some(outcome.user_message());
            }
            SubmitOutcome::Rejected { message } => {
                tracing::info!(
                    event = "code_rejected",
                    reason = message.as_deref().unwrap_or("unspecified"),
                    "Verification rejected by service"
                );
                self.error = Some(outcome.user_message());
                self.success = None;
            }
            SubmitOutcome::TransportFailed { reason } => {
                tracing::warn!(
                    event = "verification_transport_failed",
                    reason = reason.as_str(),
                    "Could not reach verification service"
                );
                self.error = Some(outcome.user_message());
                self.success = None;
            }
        }
    }

    /// Validate, send and apply the result in one go.
    ///
    /// Returns `None` when nothing was sent.
    pub async fn submit<C>(&mut self, client: &C) -> Option<SubmitOutcome>
    where
        C: VerificationClientTrait + ?Sized,
    {
        let code = self.begin_submit()?;
        let outcome = SubmitOutcome::from(client.verify(&code).await);
        self.finish_submit(&outcome);
        Some(outcome)
    }
}
