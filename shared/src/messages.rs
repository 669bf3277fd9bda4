//! User-visible messages shared by the server and the entry form.
//!
//! The server strings are part of the wire contract of `POST /api/verify`,
//! the form strings are what the entry form shows below its cells.

/// 400: the submitted code is missing or not six characters long
pub const INVALID_CODE_LENGTH: &str = "Invalid code. Code must be 6 digits long.";

/// 400: the submitted code ends in the forbidden digit
pub const CODE_ENDS_IN_SEVEN: &str = "Verification Error: Code ends in 7";

/// 500: any unexpected failure inside the verification handler
pub const SERVER_ERROR: &str = "Server error, please try again later.";

/// 404: unknown route
pub const NOT_FOUND: &str = "Not found";

/// Paste rejected because it is not 1 to 6 decimal digits
pub const FORM_INVALID_PASTE: &str = "Please paste up to 6 digits.";

/// Submit rejected locally because a cell is empty or non-numeric
pub const FORM_INVALID_CODE: &str = "Please enter valid 6 digits.";

/// The service accepted the code
pub const FORM_VERIFIED: &str = "Verification successful!";

/// The service answered but rejected the code
pub const FORM_REJECTED: &str = "Verification failed.";

/// The service could not be reached or answered with garbage
pub const FORM_TRANSPORT_ERROR: &str = "Verification error.";
