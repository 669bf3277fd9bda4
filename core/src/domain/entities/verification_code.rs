//! Verification code entity: six decimal digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::VerificationError;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// A code whose last character is this digit is always rejected
pub const FORBIDDEN_LAST_DIGIT: char = '7';

/// Whether `c` may occupy a position of a verification code
pub fn is_code_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// A well-formed verification code: exactly [`CODE_LENGTH`] ASCII digits.
///
/// Construction goes through [`FromStr`] / [`TryFrom`], so holding a
/// `VerificationCode` means the client-side shape check has passed. The
/// forbidden-last-digit rule belongs to the service, not to this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerificationCode(String);

impl VerificationCode {
    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for VerificationCode {
    type Err = VerificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actual = s.chars().count();
        if actual != CODE_LENGTH {
            return Err(VerificationError::InvalidLength { actual });
        }
        if let Some(position) = s.chars().position(|c| !is_code_digit(c)) {
            return Err(VerificationError::NonDigit { position });
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for VerificationCode {
    type Error = VerificationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VerificationCode> for String {
    fn from(code: VerificationCode) -> Self {
        code.0
    }
}

impl AsRef<str> for VerificationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
