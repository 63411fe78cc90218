//! UK postcode value type.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use super::error::{PostcodeField, ValidationError};

/// UK postcode grammar, uppercase only, optional single interior space.
static UK_POSTCODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{1,2}[0-9][A-Z0-9]? ?[0-9][A-Z]{2}$")
        .expect("Failed to compile UK postcode regex")
});

/// Position after which the separating space is inserted.
///
/// Real outward codes are 2-4 characters long, so this only lines up with
/// the outward/inward boundary for 4-character outward codes (`SW1A 1AA`).
/// Shorter outward codes end up split in the wrong place and are rejected
/// (`M1 1AE` becomes `M11A E`). Kept as-is for compatibility with existing
/// clients that format input the same way.
const SPLIT_AFTER: usize = 4;

/// Error returned when a string is not a valid UK postcode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid UK postcode: {formatted:?}")]
pub struct InvalidPostcode {
    /// The input after formatting, as it was matched.
    pub formatted: String,
}

/// Format raw postcode input the way the input form does while typing.
///
/// Strips all spaces and uppercases. If more than four characters
/// remain, a single space is inserted after the fourth.
///
/// ```
/// use travel_cost_server::domain::format_postcode;
///
/// assert_eq!(format_postcode("sw1a1aa"), "SW1A 1AA");
/// assert_eq!(format_postcode("SW1A   1AA"), "SW1A 1AA");
/// assert_eq!(format_postcode("ec1"), "EC1");
/// ```
pub fn format_postcode(raw: &str) -> String {
    let compact: Vec<char> = raw
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_uppercase)
        .collect();

    if compact.len() > SPLIT_AFTER {
        let (outward, inward) = compact.split_at(SPLIT_AFTER);
        let mut formatted = String::with_capacity(compact.len() + 1);
        formatted.extend(outward);
        formatted.push(' ');
        formatted.extend(inward);
        formatted
    } else {
        compact.into_iter().collect()
    }
}

/// A validated, canonically formatted UK postcode.
///
/// # Examples
///
/// ```
/// use travel_cost_server::domain::Postcode;
///
/// let pc = Postcode::parse("sw1a1aa").unwrap();
/// assert_eq!(pc.as_str(), "SW1A 1AA");
///
/// assert!(Postcode::parse("12345").is_err());
/// assert!(Postcode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Postcode(String);

impl Postcode {
    /// Format and validate a raw postcode.
    pub fn parse(raw: &str) -> Result<Self, InvalidPostcode> {
        let formatted = format_postcode(raw);

        if UK_POSTCODE.is_match(&formatted) {
            Ok(Postcode(formatted))
        } else {
            Err(InvalidPostcode { formatted })
        }
    }

    /// Returns the formatted postcode.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validate a postcode supplied for the given form field.
pub fn validate(raw: &str, field: PostcodeField) -> Result<Postcode, ValidationError> {
    Postcode::parse(raw).map_err(|e| ValidationError::InvalidPostcode {
        field,
        value: e.formatted,
    })
}

impl fmt::Debug for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Postcode({})", self.0)
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Postcode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
