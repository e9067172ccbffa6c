//! UK postcode normalisation, validation and printing.

use super::errors::{ValidationError, ValidationResult};
use crate::formatters::remove_whitespace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Standard postcodes, British Forces (BFPO) and the Girobank special case.
static POSTCODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(^[A-Z]{1,2}[0-9][0-9A-Z]?[0-9][A-BD-HJLNP-UW-Z]{2}$)|(^BFPO?(C/O)?[0-9]{1,4}$)|(^GIR0AA$)",
    )
    .expect("Failed to compile postcode regex")
});

/// Remove all whitespace and upper-case.
///
/// ```
/// use notify_recipients::domain::normalise_postcode;
///
/// assert_eq!(normalise_postcode(" sw1    3ef "), "SW13EF");
/// ```
pub fn normalise_postcode(postcode: &str) -> String {
    remove_whitespace(postcode).to_uppercase()
}

/// Whether the postcode is a plausible UK postcode.
pub fn is_a_real_uk_postcode(postcode: &str) -> bool {
    POSTCODE_REGEX.is_match(&normalise_postcode(postcode))
}

/// Put the postcode in the form used on printed letters.
///
/// No validation happens here; anything shorter than the inward code is
/// returned with a leading space.
pub fn format_postcode_for_printing(postcode: &str) -> String {
    let normalised = normalise_postcode(postcode);

    if let Some(rest) = normalised.strip_prefix("BFPOC/O") {
        return format!("BFPO C/O {}", rest);
    }

    if normalised.contains("BFPO") {
        let chars: Vec<char> = normalised.chars().collect();
        let (head, tail) = chars.split_at(chars.len().min(4));
        return format!(
            "{} {}",
            head.iter().collect::<String>(),
            tail.iter().collect::<String>()
        );
    }

    let chars: Vec<char> = normalised.chars().collect();
    let (outward, inward) = chars.split_at(chars.len().saturating_sub(3));
    format!(
        "{} {}",
        outward.iter().collect::<String>(),
        inward.iter().collect::<String>()
    )
}

/// A validated UK postcode, stored in its printed form.
///
/// ```
/// use notify_recipients::domain::Postcode;
///
/// let postcode = Postcode::new("sw13ef").unwrap();
/// assert_eq!(postcode.as_str(), "SW1 3EF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Postcode(String);

impl Postcode {
    /// Validate and format a postcode.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPostcode` if the postcode is not real.
    pub fn new(postcode: &str) -> ValidationResult<Self> {
        if !is_a_real_uk_postcode(postcode) {
            tracing::debug!("Rejected postcode");
            return Err(ValidationError::InvalidPostcode);
        }
        Ok(Self(format_postcode_for_printing(postcode)))
    }

    /// Get the postcode as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Postcode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Postcode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Postcode::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
