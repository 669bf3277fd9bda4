//! A single-character input position of the entry form

use crate::domain::entities::verification_code::is_code_digit;

/// One of the six cells. The value and the error flag live together so
/// they are always updated in the same step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    value: Option<char>,
    error: bool,
}

impl Cell {
    /// An empty, unflagged cell
    pub const EMPTY: Cell = Cell {
        value: None,
        error: false,
    };

    /// Holds `c`; flagged unless `c` is a digit
    pub fn with_char(c: char) -> Self {
        Self {
            value: Some(c),
            error: !is_code_digit(c),
        }
    }

    pub fn value(&self) -> Option<char> {
        self.value
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Present and a digit
    pub fn is_valid(&self) -> bool {
        self.value.map_or(false, is_code_digit)
    }

    /// Recompute the flag the way submit does: empty or non-digit is an error
    pub(crate) fn revalidate(&mut self) -> bool {
        self.error = !self.is_valid();
        self.error
    }

    /// Entered text: flagged when empty or non-numeric
    pub(crate) fn enter(&mut self, value: Option<char>) {
        self.value = value;
        self.error = !self.is_valid();
    }
}
