//! Recipient validation errors.

use thiserror::Error;

/// Why a candidate recipient was rejected.
///
/// Each validator reports the first rule the candidate breaks. Email failures
/// all collapse into [`ValidationError::InvalidEmail`]; phone number failures
/// are told apart so callers can give better guidance.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The email address broke one of the address rules.
    #[error("Not a valid email address")]
    InvalidEmail,

    /// Fewer significant digits than the rule allows.
    #[error("Not enough digits")]
    TooFewDigits,

    /// More significant digits than the rule allows.
    #[error("Too many digits")]
    TooManyDigits,

    /// Something other than digits and separators.
    #[error("Must not contain letters or symbols")]
    InvalidCharacters,

    /// No known international calling code at the start of the number.
    #[error("Not a valid country prefix")]
    InvalidCountryPrefix,

    /// Not a standard, British Forces or Girobank postcode.
    #[error("Not a real UK postcode")]
    InvalidPostcode,
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
