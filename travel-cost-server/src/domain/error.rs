//! Domain error types.
//!
//! These errors represent invalid user input caught before any network
//! call is made. They are distinct from API/IO errors.

use std::fmt;

/// Which postcode field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostcodeField {
    /// Journey origin.
    Start,
    /// Journey destination.
    End,
}

impl PostcodeField {
    /// Returns the field name as used in messages and API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostcodeField::Start => "start",
            PostcodeField::End => "end",
        }
    }
}

impl fmt::Display for PostcodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Postcode does not match the UK postcode grammar after formatting
    #[error("invalid {field} postcode: {value:?}")]
    InvalidPostcode { field: PostcodeField, value: String },

    /// Hourly rate is unparseable, zero, negative or too large
    #[error("invalid hourly rate: {reason}")]
    InvalidRate { reason: &'static str },
}

impl ValidationError {
    /// Name of the offending input field: `start`, `end` or `rate`.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidPostcode { field, .. } => field.as_str(),
            ValidationError::InvalidRate { .. } => "rate",
        }
    }
}
