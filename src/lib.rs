//! Roman numeral conversion
//!
//! Re-exports the `roman-numeral` crate; the `roman` binary lives in `roman-cli`.

pub use roman_numeral::*;
