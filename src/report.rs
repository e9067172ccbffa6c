//! Per-candidate validation reports.

use crate::domain::{
    validate_and_format_email_address, validate_phone_number_with, Postcode, ValidationError,
};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which validator a candidate is checked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientKind {
    /// Email address, canonicalised to lower case
    Email,

    /// Phone number, echoed back as given
    Phone,

    /// UK postcode, put in printed form
    Postcode,
}

impl FromStr for RecipientKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "phone" | "sms" => Ok(Self::Phone),
            "postcode" => Ok(Self::Postcode),
            other => Err(format!("Unknown recipient kind: {}", other)),
        }
    }
}

impl fmt::Display for RecipientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Postcode => "postcode",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of checking one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Validator the candidate was checked with.
    pub kind: RecipientKind,

    /// Candidate exactly as supplied.
    pub input: String,

    /// Canonical form, present when the candidate is valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,

    /// User-facing reason, present when the candidate is invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    /// Run the validator for `kind` against `input`.
    ///
    /// Emails are lower-cased, postcodes are put in printed form, and phone
    /// numbers are echoed back.
    pub fn check(kind: RecipientKind, input: &str, allow_international: bool) -> Self {
        let outcome: Result<String, ValidationError> = match kind {
            RecipientKind::Email => validate_and_format_email_address(input),
            RecipientKind::Phone => validate_phone_number_with(input, allow_international),
            RecipientKind::Postcode => Postcode::new(input).map(Postcode::into_inner),
        };

        match outcome {
            Ok(canonical) => Self {
                kind,
                input: input.to_string(),
                canonical: Some(canonical),
                error: None,
            },
            Err(e) => Self {
                kind,
                input: input.to_string(),
                canonical: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// Whether the candidate passed.
    pub fn is_valid(&self) -> bool {
        self.canonical.is_some()
    }
}
