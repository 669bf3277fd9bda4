//! Plain-text rendering of the entry form.
//!
//! Output is a pure function of [`CodeEntryForm`]:
//!
//! ```text
//! [1] [2] !x! [ ] [ ] [ ]
//!          ^
//! Please enter valid 6 digits.
//! ```
//!
//! Flagged cells use `!` instead of brackets, the caret marks focus, and
//! the error and success lines appear only when set.

use std::fmt;

use super::{Cell, CodeEntryForm};

/// Width of one rendered cell including the separator
const CELL_WIDTH: usize = 4;

fn render_cell(cell: &Cell) -> String {
    let value = cell.value().unwrap_or(' ');
    if cell.has_error() {
        format!("!{}!", value)
    } else {
        format!("[{}]", value)
    }
}

impl fmt::Display for CodeEntryForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row: Vec<String> = self.cells().iter().map(render_cell).collect();
        writeln!(f, "{}", row.join(" "))?;
        writeln!(f, "{:>width$}", "^", width = self.focus() * CELL_WIDTH + 2)?;

        if self.is_pending() {
            writeln!(f, "Verifying...")?;
        }
        if let Some(error) = self.error() {
            writeln!(f, "{}", error)?;
        }
        if let Some(success) = self.success() {
            writeln!(f, "{}", success)?;
        }
        Ok(())
    }
}
