//! Character-class validators
//!
//! Single-rule checks over the whole input: letters, digits, hex, case and
//! ASCII. Each one rejects the empty string unless stated otherwise.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());
static HEXADECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]+$").unwrap());
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?(?:[0-9a-fA-F]{3}){1,2}$").unwrap());

/// `true` if every char of `input` is an ASCII digit and there is at least one.
///
/// Shared by the checksum routines, which must never index into a
/// non-digit character.
pub(crate) fn is_ascii_digits(input: &str) -> bool {
    NUMERIC.is_match(input)
}

// ============================================================================
// ALPHA / NUMERIC / ALPHANUMERIC
// ============================================================================

crate::validator! {
    /// One or more ASCII letters, nothing else.
    pub Alpha for str;
    rule(input) { ALPHA.is_match(input) }
    error(input) { ValidationError::new("alpha", "Input must contain only letters (a-zA-Z)") }
    fn alpha();
}

crate::validator! {
    /// One or more ASCII digits, nothing else. No sign, no decimal point.
    pub Numeric for str;
    rule(input) { is_ascii_digits(input) }
    error(input) { ValidationError::new("numeric", "Input must contain only digits (0-9)") }
    fn numeric();
}

crate::validator! {
    /// One or more ASCII letters or digits.
    pub Alphanumeric for str;
    rule(input) { ALPHANUMERIC.is_match(input) }
    error(input) {
        ValidationError::new("alphanumeric", "Input must contain only letters and digits")
    }
    fn alphanumeric();
}

// ============================================================================
// HEX
// ============================================================================

crate::validator! {
    /// One or more hexadecimal digits, either case.
    pub Hexadecimal for str;
    rule(input) { HEXADECIMAL.is_match(input) }
    error(input) { ValidationError::invalid_format("hexadecimal number") }
    fn hexadecimal();
}

crate::validator! {
    /// A CSS-style hex color: 3 or 6 hex digits with an optional leading `#`.
    pub HexColor for str;
    rule(input) { HEX_COLOR.is_match(input) }
    error(input) { ValidationError::invalid_format("hex color") }
    fn hex_color();
}

crate::validator! {
    /// A MongoDB ObjectId: exactly 24 hexadecimal digits.
    pub MongoId for str;
    rule(input) { input.len() == 24 && HEXADECIMAL.is_match(input) }
    error(input) { ValidationError::invalid_format("MongoDB ObjectId") }
    fn mongo_id();
}

// ============================================================================
// CASE
// ============================================================================

crate::validator! {
    /// Input is unchanged by lower-casing. Digits and punctuation pass.
    pub Lowercase for str;
    rule(input) { input.to_lowercase() == input }
    error(input) { ValidationError::new("lowercase", "Input must be lowercase") }
    fn lowercase();
}

crate::validator! {
    /// Input is unchanged by upper-casing. Digits and punctuation pass.
    pub Uppercase for str;
    rule(input) { input.to_uppercase() == input }
    error(input) { ValidationError::new("uppercase", "Input must be uppercase") }
    fn uppercase();
}

// ============================================================================
// ASCII
// ============================================================================

crate::validator! {
    /// Every char is in the 7-bit ASCII range. The empty string passes.
    pub Ascii for str;
    rule(input) { input.is_ascii() }
    error(input) { ValidationError::new("ascii", "Input must contain only ASCII characters") }
    fn ascii();
}

// ============================================================================
// TESTS
// ============================================================================
