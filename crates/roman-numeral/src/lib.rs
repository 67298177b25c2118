//! Decimal to Roman numeral conversion
//!
//! Greedy conversion over a descending symbol table that includes the six
//! subtractive pairs (CM, CD, XC, XL, IX, IV).

pub mod converter;
pub mod error;

pub use converter::{Converter, Mode};
pub use error::RomanError;

/// Smallest value with a standard Roman numeral
pub const MIN_VALUE: i32 = 1;

/// Largest value with a standard Roman numeral
pub const MAX_VALUE: i32 = 3999;

/// Symbol table in descending value order
pub const SYMBOLS: [(i32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert `n` to a Roman numeral without any range check
///
/// Values in `MIN_VALUE..=MAX_VALUE` produce the standard numeral. `0` and
/// negative values produce an empty string, and values above `MAX_VALUE`
/// produce a leading run of `M`s (`4310` gives `"MMMMCCCX"`).
#[must_use]
pub fn convert(n: i32) -> String {
    let mut remainder = n;
    let mut roman = String::new();

    for &(value, symbol) in &SYMBOLS {
        // Negative remainders never fit a symbol
        let count = usize::try_from(remainder / value).unwrap_or(0);
        for _ in 0..count {
            roman.push_str(symbol);
        }
        remainder %= value;
    }

    roman
}

/// Convert `n` to a Roman numeral, rejecting values without a standard form
///
/// # Errors
///
/// Returns `RomanError::InvalidArgument` if `n` is outside `MIN_VALUE..=MAX_VALUE`
pub fn try_convert(n: i32) -> Result<String, RomanError> {
    if !is_representable(n) {
        return Err(RomanError::invalid_argument(n));
    }
    Ok(convert(n))
}

#[must_use]
pub const fn is_representable(n: i32) -> bool {
    n >= MIN_VALUE && n <= MAX_VALUE
}

/// Parse a decimal integer, ignoring surrounding whitespace
///
/// # Errors
///
/// Returns `RomanError::Parse` if `text` is not an `i32`
pub fn parse_value(text: &str) -> Result<i32, RomanError> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| RomanError::parse(text))
}
