//! Configurable converter
//!
//! Wraps the free functions behind a value that remembers whether input
//! is range-checked, so callers can pick a policy once and reuse it.

use crate::{RomanError, convert, try_convert};

/// Range policy applied before conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Reject anything outside `MIN_VALUE..=MAX_VALUE`
    #[default]
    Strict,
    /// Run the greedy algorithm on any input; never fails
    Permissive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    mode: Mode,
}

impl Converter {
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn strict() -> Self {
        Self::new(Mode::Strict)
    }

    #[must_use]
    pub const fn permissive() -> Self {
        Self::new(Mode::Permissive)
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Convert `n` according to this converter's mode
    ///
    /// # Errors
    ///
    /// Returns `RomanError::InvalidArgument` in strict mode when `n` is out of range
    pub fn convert(&self, n: i32) -> Result<String, RomanError> {
        match self.mode {
            Mode::Strict => try_convert(n),
            Mode::Permissive => Ok(convert(n)),
        }
    }
}
