//! Line-driven terminal front end for the code entry form.
//!
//! Each input line is one event. Cells are numbered 1 to 6 for the user
//! and 0 to 5 internally.

mod command;

use tracing::debug;
use vc_core::form::{CodeEntryForm, SubmitOutcome, VerificationClientTrait};

pub use command::{Command, ParseError, HELP};

/// What the driver loop should do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep reading; show the re-rendered form
    Continue,
    /// Print the given text, then keep reading
    Print(&'static str),
    /// Stop reading input
    Quit,
}

/// A form plus the client it submits to
pub struct TerminalSession<C: VerificationClientTrait> {
    form: CodeEntryForm,
    client: C,
}

impl<C: VerificationClientTrait> TerminalSession<C> {
    pub fn new(client: C) -> Self {
        Self {
            form: CodeEntryForm::new(),
            client,
        }
    }

    pub fn form(&self) -> &CodeEntryForm {
        &self.form
    }

    /// Apply one command to the form
    pub async fn apply(&mut self, command: Command) -> Step {
        debug!(?command, "Applying terminal command");

        match command {
            Command::Type { cell, text } => {
                self.form.enter(cell, &text);
            }
            Command::Keys(text) => {
                // One keystroke per character, each landing on the focused cell
                for c in text.chars() {
                    let focus = self.form.focus();
                    self.form.enter(focus, &c.to_string());
                }
            }
            Command::Backspace => {
                let focus = self.form.focus();
                self.form.backspace(focus);
            }
            Command::Paste(text) => {
                self.form.paste(&text);
            }
            Command::Submit => {
                if let Some(SubmitOutcome::TransportFailed { reason }) =
                    self.form.submit(&self.client).await
                {
                    debug!(%reason, "Submission failed in transport");
                }
            }
            Command::Show => {}
            Command::Help => return Step::Print(HELP),
            Command::Quit => return Step::Quit,
        }
        Step::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vc_core::form::mock::MockVerificationClient;

    #[tokio::test]
    async fn test_keys_land_on_focused_cell() {
        let mut session = TerminalSession::new(MockVerificationClient::accepting());
        session.apply(Command::Keys("123".to_string())).await;
        assert_eq!(session.form().code(), "123");
        assert_eq!(session.form().focus(), 3);

        session.apply(Command::Backspace).await;
        assert_eq!(session.form().code(), "123");
        assert_eq!(session.form().focus(), 2);

        session.apply(Command::Backspace).await;
        assert_eq!(session.form().code(), "12");
    }

    #[tokio::test]
    async fn test_non_digit_key_is_overwritten_by_next_key() {
        let mut session = TerminalSession::new(MockVerificationClient::accepting());
        session.apply(Command::Keys("1x2".to_string())).await;
        assert_eq!(session.form().code(), "12");
        assert_eq!(session.form().cell_errors(), [false; 6]);
    }

    #[tokio::test]
    async fn test_paste_and_submit() {
        let client = MockVerificationClient::accepting();
        let mut session = TerminalSession::new(client.clone());

        session.apply(Command::Paste("123456".to_string())).await;
        assert_eq!(session.apply(Command::Submit).await, Step::Continue);

        assert_eq!(client.sent(), vec!["123456".to_string()]);
        assert_eq!(session.form().success(), Some("Verification successful!"));
    }

    #[tokio::test]
    async fn test_help_and_quit() {
        let mut session = TerminalSession::new(MockVerificationClient::accepting());
        assert_eq!(session.apply(Command::Help).await, Step::Print(HELP));
        assert_eq!(session.apply(Command::Quit).await, Step::Quit);
    }
}
