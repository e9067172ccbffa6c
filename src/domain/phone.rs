//! PhoneNumber value object and phone number validation.
//!
//! Numbers are split into two families before any length rule applies:
//!
//! - **Domestic** (UK): a single leading `0`, the `44` calling code, or a
//!   short number starting with `7`. Judged on the significant number left
//!   after dropping the calling code and trunk zeros.
//! - **International**: everything else. Judged on the full digit string,
//!   which must also begin with a known calling code.
//!
//! Validation is a predicate: on success the caller's input is handed back
//! untouched.

use super::country_prefixes::{find_country_prefix, DOMESTIC_PREFIX};
use super::errors::{ValidationError, ValidationResult};
use crate::formatters::ALL_WHITESPACE;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;

const DOMESTIC_DIGITS: RangeInclusive<usize> = 8..=10;
const INTERNATIONAL_DIGITS: RangeInclusive<usize> = 8..=15;

/// Numbers starting with 7 and shorter than this are assumed to be domestic
/// mobiles typed without a trunk prefix.
const SHORT_MOBILE_LENGTH: usize = 11;

const SEPARATORS: [char; 4] = ['(', ')', '-', '+'];

/// Remove separators and whitespace, check what remains is all digits, and
/// drop leading zeros.
///
/// # Errors
///
/// Returns `ValidationError::InvalidCharacters` if anything other than digits
/// remains after the separators are removed.
///
/// # Example
///
/// ```
/// use notify_recipients::domain::strip_formatting;
///
/// assert_eq!(strip_formatting("+44 (0)7123-456 789").unwrap(), "4407123456789");
/// assert_eq!(strip_formatting("07123 456789").unwrap(), "7123456789");
/// ```
pub fn strip_formatting(candidate: &str) -> ValidationResult<String> {
    let digits: String = candidate
        .chars()
        .filter(|c| !SEPARATORS.contains(c) && !ALL_WHITESPACE.contains(c))
        .collect();

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        tracing::debug!("Phone number contains non-digit characters");
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(digits.trim_start_matches('0').to_string())
}

/// Whether the number should be judged by the domestic rules.
///
/// # Errors
///
/// Returns `ValidationError::InvalidCharacters` if the number has to be
/// stripped to be classified and contains letters or symbols.
pub fn is_domestic(candidate: &str) -> ValidationResult<bool> {
    if candidate.starts_with('0') && !candidate.starts_with("00") {
        return Ok(true);
    }

    let digits = strip_formatting(candidate)?;
    Ok(digits.starts_with(DOMESTIC_PREFIX)
        || (digits.starts_with('7') && digits.len() < SHORT_MOBILE_LENGTH))
}

/// Validate a phone number, accepting international numbers.
///
/// Returns the candidate exactly as given.
///
/// # Errors
///
/// Returns `TooFewDigits`, `TooManyDigits`, `InvalidCharacters` or
/// `InvalidCountryPrefix` for the first rule the number breaks.
///
/// # Example
///
/// ```
/// use notify_recipients::domain::{validate_phone_number, ValidationError};
///
/// assert_eq!(validate_phone_number("07123456789").unwrap(), "07123456789");
/// assert_eq!(validate_phone_number("+12025550104").unwrap(), "+12025550104");
/// assert_eq!(validate_phone_number("07123456"), Err(ValidationError::TooFewDigits));
/// ```
pub fn validate_phone_number(candidate: &str) -> ValidationResult<String> {
    validate_phone_number_with(candidate, true)
}

/// Validate a phone number, optionally restricted to the domestic rules.
///
/// With `allow_international` off every number is judged as domestic, so an
/// international number fails on its digit count.
pub fn validate_phone_number_with(
    candidate: &str,
    allow_international: bool,
) -> ValidationResult<String> {
    if !allow_international || is_domestic(candidate)? {
        validate_domestic(candidate)?;
    } else {
        validate_international(candidate)?;
    }

    Ok(candidate.to_string())
}

fn validate_domestic(candidate: &str) -> ValidationResult<()> {
    let digits = strip_formatting(candidate)?;
    let national = digits.strip_prefix(DOMESTIC_PREFIX).unwrap_or(&digits);
    let significant = national.trim_start_matches('0');

    check_length(significant.len(), &DOMESTIC_DIGITS)
}

fn validate_international(candidate: &str) -> ValidationResult<()> {
    let digits = strip_formatting(candidate)?;
    check_length(digits.len(), &INTERNATIONAL_DIGITS)?;

    match find_country_prefix(&digits) {
        Some(prefix) => {
            tracing::trace!(prefix, "Matched country prefix");
            Ok(())
        }
        None => {
            tracing::debug!("No known country prefix");
            Err(ValidationError::InvalidCountryPrefix)
        }
    }
}

fn check_length(len: usize, allowed: &RangeInclusive<usize>) -> ValidationResult<()> {
    if len < *allowed.start() {
        tracing::debug!(len, "Phone number has too few digits");
        Err(ValidationError::TooFewDigits)
    } else if len > *allowed.end() {
        tracing::debug!(len, "Phone number has too many digits");
        Err(ValidationError::TooManyDigits)
    } else {
        Ok(())
    }
}

/// How a number would be routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InternationalPhoneInfo {
    /// Whether the number is judged by the international rules.
    pub international: bool,

    /// Calling code the number starts with, if a known one was found.
    pub country_prefix: Option<&'static str>,
}

/// Classify a number and report its calling code.
///
/// Domestic numbers always report [`DOMESTIC_PREFIX`]. Length is not checked.
///
/// # Errors
///
/// Returns `ValidationError::InvalidCharacters` if the number contains
/// letters or symbols.
pub fn international_phone_info(candidate: &str) -> ValidationResult<InternationalPhoneInfo> {
    if is_domestic(candidate)? {
        return Ok(InternationalPhoneInfo {
            international: false,
            country_prefix: Some(DOMESTIC_PREFIX),
        });
    }

    let digits = strip_formatting(candidate)?;
    Ok(InternationalPhoneInfo {
        international: true,
        country_prefix: find_country_prefix(&digits),
    })
}

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// The original formatting is preserved.
///
/// # Example
///
/// ```
/// use notify_recipients::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (202) 555-0104").unwrap();
/// assert_eq!(phone.as_str(), "+1 (202) 555-0104");
/// assert_eq!(phone.digits(), "12025550104");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, accepting international numbers.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first rule the number breaks.
    pub fn new(phone: impl Into<String>) -> ValidationResult<Self> {
        let phone = phone.into();
        validate_phone_number(&phone)?;
        Ok(Self(phone))
    }

    /// Create a new PhoneNumber that must pass the domestic rules.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first rule the number breaks.
    pub fn domestic(phone: impl Into<String>) -> ValidationResult<Self> {
        let phone = phone.into();
        validate_phone_number_with(&phone, false)?;
        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Digits only, without separators or leading zeros.
    pub fn digits(&self) -> String {
        let digits: String = self.0.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.trim_start_matches('0').to_string()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_formatting() {
        assert_eq!(strip_formatting("07123 456789").unwrap(), "7123456789");
        assert_eq!(strip_formatting("(0)7123-456-789").unwrap(), "7123456789");
        assert_eq!(strip_formatting("\u{00A0}+44\u{200B}7123456789\t").unwrap(), "447123456789");
        assert_eq!(strip_formatting("000").unwrap(), "");
    }

    #[test]
    fn test_nothing_but_separators_is_too_few_digits() {
        for candidate in ["", "+", "()", " - "] {
            assert_eq!(strip_formatting(candidate).as_deref(), Ok(""), "{:?}", candidate);
            assert_eq!(
                validate_phone_number(candidate),
                Err(ValidationError::TooFewDigits),
                "{:?}",
                candidate
            );
        }
    }

    #[test]
    fn test_strip_formatting_rejects_letters_and_symbols() {
        for candidate in ["0712345678a", "07123.456789", "+44 7123 456789 ext 1", "٠٧١٢٣"] {
            assert_eq!(
                strip_formatting(candidate),
                Err(ValidationError::InvalidCharacters),
                "{}",
                candidate
            );
        }
    }

    #[test]
    fn test_is_domestic() {
        assert_eq!(is_domestic("07123456789"), Ok(true));
        assert_eq!(is_domestic("0abc"), Ok(true));
        assert_eq!(is_domestic("+447123456789"), Ok(true));
        assert_eq!(is_domestic("00447123456789"), Ok(true));
        assert_eq!(is_domestic("7123456789"), Ok(true));
        assert_eq!(is_domestic("71234567890"), Ok(false));
        assert_eq!(is_domestic("+12025550104"), Ok(false));
        assert_eq!(is_domestic("0012025550104"), Ok(false));
        assert_eq!(is_domestic("+1 202 abc"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn test_valid_domestic_numbers_are_echoed() {
        let valid = [
            "07123456789",
            "07123 456789",
            "07123-456-789",
            "(07123) 456789",
            "+447123456789",
            "+44 7123 456 789",
            "+44 (0)7123 456 789",
            "0044 7123 456789",
            "7123456789",
            "020 7946 0018",
            "01632 960001",
            "01632 96000",
        ];

        for number in valid {
            assert_eq!(validate_phone_number(number).as_deref(), Ok(number), "{}", number);
        }
    }

    #[test]
    fn test_domestic_digit_bounds() {
        assert_eq!(validate_phone_number("07123456"), Err(ValidationError::TooFewDigits));
        assert_eq!(validate_phone_number("0712345678901"), Err(ValidationError::TooManyDigits));
        assert_eq!(validate_phone_number("+44712345"), Err(ValidationError::TooFewDigits));
        assert_eq!(validate_phone_number("0"), Err(ValidationError::TooFewDigits));
    }

    #[test]
    fn test_domestic_prefix_is_stripped_once() {
        // 44 followed by a national number that itself starts with 44.
        assert_eq!(validate_phone_number("+44 4412 345678").as_deref(), Ok("+44 4412 345678"));
    }

    #[test]
    fn test_valid_international_numbers_are_echoed() {
        let valid = [
            "+12025550104",
            "+1 (202) 555-0104",
            "0012025550104",
            "+353 1 234 5678",
            "+49 151 12345678",
            "+7 912 345 67 89",
            "+86 131 2345 6789",
        ];

        for number in valid {
            assert_eq!(validate_phone_number(number).as_deref(), Ok(number), "{}", number);
        }
    }

    #[test]
    fn test_international_digit_bounds() {
        assert_eq!(validate_phone_number("+1 202 555"), Err(ValidationError::TooFewDigits));
        assert_eq!(
            validate_phone_number("+1 202 555 0104 12345"),
            Err(ValidationError::TooManyDigits)
        );
    }

    #[test]
    fn test_international_unknown_prefix() {
        assert_eq!(
            validate_phone_number("+800 1234 5678"),
            Err(ValidationError::InvalidCountryPrefix)
        );
        assert_eq!(
            validate_phone_number("+28 1234 5678"),
            Err(ValidationError::InvalidCountryPrefix)
        );
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_phone_number("07123 45678a"),
            Err(ValidationError::InvalidCharacters)
        );
        assert_eq!(
            validate_phone_number("+1 202-555-0104 x2"),
            Err(ValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn test_domestic_only_rejects_international() {
        assert_eq!(
            validate_phone_number_with("+12025550104", false),
            Err(ValidationError::TooManyDigits)
        );
        assert_eq!(
            validate_phone_number_with("07123456789", false).as_deref(),
            Ok("07123456789")
        );
    }

    #[test]
    fn test_international_phone_info() {
        assert_eq!(
            international_phone_info("07123456789"),
            Ok(InternationalPhoneInfo {
                international: false,
                country_prefix: Some("44"),
            })
        );
        assert_eq!(
            international_phone_info("+353 1 234 5678"),
            Ok(InternationalPhoneInfo {
                international: true,
                country_prefix: Some("353"),
            })
        );
        assert_eq!(
            international_phone_info("+800 1234 5678"),
            Ok(InternationalPhoneInfo {
                international: true,
                country_prefix: None,
            })
        );
        assert_eq!(
            international_phone_info("call me"),
            Err(ValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn test_phone_value_object() {
        let phone = PhoneNumber::new("+44 7123 456 789").unwrap();
        assert_eq!(phone.as_str(), "+44 7123 456 789");
        assert_eq!(phone.digits(), "447123456789");
        assert_eq!(format!("{}", phone), "+44 7123 456 789");
        assert_eq!(phone.into_inner(), "+44 7123 456 789");
    }

    #[test]
    fn test_phone_domestic_constructor() {
        assert!(PhoneNumber::domestic("07123456789").is_ok());
        assert_eq!(
            PhoneNumber::domestic("+12025550104"),
            Err(ValidationError::TooManyDigits)
        );
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("07123456789").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"07123456789\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: PhoneNumber = serde_json::from_str("\"+12025550104\"").unwrap();
        assert_eq!(phone.as_str(), "+12025550104");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
