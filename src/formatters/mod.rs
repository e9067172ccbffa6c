//! Text cleaning shared by the recipient validators.
//!
//! Pasted contact details regularly carry invisible characters (zero width
//! spaces, non-breaking spaces, byte order marks) that break matching further
//! down the line. Everything here removes them before any other rule runs.

pub mod whitespace;

pub use whitespace::{normalize, remove_whitespace, ALL_WHITESPACE, OBSCURE_WHITESPACE, WHITESPACE};
