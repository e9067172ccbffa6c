//! Internationalised domain name encoding.
//!
//! Email validation only needs one capability from IDNA: turning a Unicode
//! hostname into its ASCII-compatible form, or refusing to. That capability
//! sits behind [`DomainEncoder`] so tests can swap it out.

use thiserror::Error;

/// The hostname could not be converted to ASCII.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot encode hostname: {0}")]
pub struct EncodingError(pub String);

/// Converts a hostname to its ASCII-compatible encoding.
pub trait DomainEncoder: Send + Sync {
    /// Encode every label of `hostname`, lower-cased, with `xn--` labels for
    /// anything outside ASCII.
    fn to_ascii(&self, hostname: &str) -> Result<String, EncodingError>;
}

/// UTS #46 processing backed by the `idna` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Uts46Encoder;

impl DomainEncoder for Uts46Encoder {
    fn to_ascii(&self, hostname: &str) -> Result<String, EncodingError> {
        idna::domain_to_ascii(hostname).map_err(|e| EncodingError(format!("{:?}", e)))
    }
}
