//! Error types for Roman numeral conversion

use crate::{MAX_VALUE, MIN_VALUE};

/// Errors reported by validated conversion and input parsing
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RomanError {
    #[error("Roman: ERR_INVALID_ARGUMENT: {value} is outside {min}..={max}")]
    InvalidArgument { value: i32, min: i32, max: i32 },

    #[error("Roman: ERR_PARSE: {input:?} is not an integer")]
    Parse { input: String },
}

impl RomanError {
    #[must_use]
    pub const fn invalid_argument(value: i32) -> Self {
        Self::InvalidArgument {
            value,
            min: MIN_VALUE,
            max: MAX_VALUE,
        }
    }

    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::Parse {
            input: input.to_string(),
        }
    }

    /// Stable error code, as printed in the `Display` output
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "ERR_INVALID_ARGUMENT",
            Self::Parse { .. } => "ERR_PARSE",
        }
    }
}
