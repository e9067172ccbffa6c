//! EmailAddress value object and email validation.

use super::errors::{ValidationError, ValidationResult};
use super::idn::{DomainEncoder, Uts46Encoder};
use crate::formatters::normalize;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const MAX_EMAIL_LENGTH: usize = 320;
const MAX_HOSTNAME_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

// Stricter than RFC 5322 on the local part: no quotes or semicolons, which
// some SMTP relays reject outright.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~\-]+@([^.@][^@\s]+)$")
        .expect("Failed to compile email regex")
});

static HOSTNAME_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(xn|[a-z0-9]+)(-?-[a-z0-9]+)*$")
        .expect("Failed to compile hostname label regex")
});

static TLD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([a-z]{2,63}|xn--([a-z0-9]+-)*[a-z0-9]+)$").expect("Failed to compile TLD regex")
});

/// Validate an email address using the default UTS #46 encoder.
///
/// Returns the address with invisible characters removed and outer whitespace
/// trimmed. Casing and any Unicode in the hostname are left as given; the
/// ASCII encoding is only used to check the hostname.
///
/// # Errors
///
/// Returns `ValidationError::InvalidEmail` for any rule violation.
///
/// # Example
///
/// ```
/// use notify_recipients::domain::validate_email_address;
///
/// assert_eq!(
///     validate_email_address("  email@domain.com  ").unwrap(),
///     "email@domain.com"
/// );
/// assert!(validate_email_address("two-dots..in-local@domain.com").is_err());
/// ```
pub fn validate_email_address(candidate: &str) -> ValidationResult<String> {
    validate_email_address_with(candidate, &Uts46Encoder)
}

/// Validate an email address with a caller-supplied hostname encoder.
pub fn validate_email_address_with(
    candidate: &str,
    encoder: &dyn DomainEncoder,
) -> ValidationResult<String> {
    let email = normalize(candidate);

    let hostname = match EMAIL_REGEX.captures(&email).and_then(|caps| caps.get(1)) {
        Some(m) => m.as_str(),
        None => return reject("grammar"),
    };

    if email.chars().count() > MAX_EMAIL_LENGTH {
        return reject("length");
    }

    // Consecutive periods are not allowed in either part.
    if email.contains("..") {
        return reject("consecutive dots");
    }

    let ascii_hostname = match encoder.to_ascii(hostname) {
        Ok(encoded) => encoded,
        Err(e) => {
            tracing::debug!(error = %e, "Hostname failed IDNA encoding");
            return reject("idna");
        }
    };

    let labels: Vec<&str> = ascii_hostname.split('.').collect();
    if ascii_hostname.len() > MAX_HOSTNAME_LENGTH || labels.len() < 2 {
        return reject("hostname length");
    }

    for label in &labels {
        if label.is_empty() || label.len() > MAX_LABEL_LENGTH || !HOSTNAME_LABEL_REGEX.is_match(label)
        {
            return reject("hostname label");
        }
    }

    // labels.len() >= 2 is checked above
    let tld = labels[labels.len() - 1];
    if !TLD_REGEX.is_match(tld) {
        return reject("top-level domain");
    }

    Ok(email)
}

/// Lower-case an address and clean it up, without validating it.
pub fn format_email_address(email: &str) -> String {
    normalize(&email.to_lowercase())
}

/// Validate an email address, then return it in canonical lower case.
///
/// Validity is judged on the address as given; only the returned value is
/// lower-cased.
///
/// # Errors
///
/// Returns `ValidationError::InvalidEmail` for any rule violation.
pub fn validate_and_format_email_address(candidate: &str) -> ValidationResult<String> {
    validate_email_address(candidate).map(|email| format_email_address(&email))
}

fn reject<T>(rule: &'static str) -> ValidationResult<T> {
    tracing::debug!(rule, "Rejected email address");
    Err(ValidationError::InvalidEmail)
}

/// A type-safe wrapper for email addresses.
///
/// This ensures that email addresses are validated at construction time.
///
/// # Example
///
/// ```
/// use notify_recipients::domain::EmailAddress;
///
/// let email = EmailAddress::new(" user@example.com ").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, keeping the casing as given.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl AsRef<str>) -> ValidationResult<Self> {
        validate_email_address(email.as_ref()).map(Self)
    }

    /// Create a new EmailAddress in canonical lower case.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn formatted(email: impl AsRef<str>) -> ValidationResult<Self> {
        validate_and_format_email_address(email.as_ref()).map(Self)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        // The grammar forbids '@' in the local part and requires exactly one.
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
