//! Notify Recipients - validation and normalisation of notification recipients.
//!
//! Decides whether user-supplied email addresses, phone numbers and UK
//! postcodes are acceptable for SMTP and SMS dispatch, and produces the form
//! used for routing.
//!
//! # Architecture
//!
//! - **formatters**: Invisible character removal and trimming shared by all validators
//! - **domain**: Email, phone number and postcode validators and their value objects
//! - **report**: Serializable per-candidate outcome used by the CLI
//! - **config**: Configuration from environment variables
//! - **error**: Configuration error types
//!
//! # Example
//!
//! ```
//! use notify_recipients::{validate_email_address, validate_phone_number, ValidationError};
//!
//! assert_eq!(validate_email_address("japanese-info@例え.テスト").unwrap(), "japanese-info@例え.テスト");
//! assert_eq!(validate_phone_number("07123456"), Err(ValidationError::TooFewDigits));
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod formatters;
pub mod report;

pub use config::{Config, OutputFormat};
pub use domain::{
    validate_and_format_email_address, validate_email_address, validate_phone_number,
    validate_phone_number_with, EmailAddress, PhoneNumber, Postcode, ValidationError,
};
pub use error::ConfigError;
pub use formatters::{normalize, remove_whitespace};
pub use report::{RecipientKind, ValidationReport};
