//! Recipient value objects and the validators behind them.
//!
//! Every validator is a pure function over the candidate string. The value
//! objects (`EmailAddress`, `PhoneNumber`, `Postcode`) run the same
//! validation at construction time, so an invalid recipient cannot be
//! represented once it has been wrapped.

pub mod country_prefixes;
pub mod email;
pub mod errors;
pub mod idn;
pub mod phone;
pub mod postcode;

pub use country_prefixes::{find_country_prefix, COUNTRY_PREFIXES, DOMESTIC_PREFIX};
pub use email::{
    format_email_address, validate_and_format_email_address, validate_email_address,
    validate_email_address_with, EmailAddress,
};
pub use errors::{ValidationError, ValidationResult};
pub use idn::{DomainEncoder, EncodingError, Uts46Encoder};
pub use phone::{
    international_phone_info, is_domestic, strip_formatting, validate_phone_number,
    validate_phone_number_with, InternationalPhoneInfo, PhoneNumber,
};
pub use postcode::{
    format_postcode_for_printing, is_a_real_uk_postcode, normalise_postcode, Postcode,
};
