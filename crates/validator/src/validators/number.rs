//! Numeric-string validators.
//!
//! These parse text; they never accept thousands separators.

use crate::foundation::{Validate, ValidationError};
use crate::validators::pattern::is_ascii_digits;

/// Strips one leading `+` or `-`.
fn unsigned(input: &str) -> &str {
    input
        .strip_prefix('-')
        .or_else(|| input.strip_prefix('+'))
        .unwrap_or(input)
}

crate::validator! {
    /// An integer of any magnitude: an optional sign followed by digits.
    ///
    /// Surrounding whitespace is ignored. `"50000000000000000000000000"` passes;
    /// `"123.0"` does not.
    pub Int for str;
    rule(input) { is_ascii_digits(unsigned(input.trim())) }
    error(input) { ValidationError::invalid_format("integer") }
    fn int();
}

crate::validator! {
    /// Parses as a 32-bit float (`"1"`, `"-2.5"`, `"1e3"`, `"inf"`).
    pub Float for str;
    rule(input) {
        let trimmed = input.trim();
        !trimmed.is_empty() && trimmed.parse::<f32>().is_ok()
    }
    error(input) { ValidationError::invalid_format("floating point number") }
    fn float();
}

/// Parses as a 32-bit integer that is a multiple of `divisor`.
///
/// A zero divisor divides nothing, so every input fails.
///
/// ```rust
/// use sift_validator::foundation::Validate;
/// use sift_validator::validators::divisible_by;
///
/// assert!(divisible_by(5).is_valid("10"));
/// assert!(!divisible_by(2).is_valid("5"));
/// assert!(!divisible_by(0).is_valid("10"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivisibleBy {
    divisor: i32,
}

impl DivisibleBy {
    #[must_use]
    pub fn new(divisor: i32) -> Self {
        Self { divisor }
    }
}

impl Validate for DivisibleBy {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let value: i32 = input
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid_format("32-bit integer"))?;

        // i32::MIN % -1 overflows; wrapping_rem yields 0 there.
        if self.divisor != 0 && value.wrapping_rem(self.divisor) == 0 {
            return Ok(());
        }
        Err(ValidationError::new(
            "divisible_by",
            format!("{value} is not divisible by {}", self.divisor),
        )
        .with_param("divisor", self.divisor.to_string()))
    }
}

#[must_use]
pub fn divisible_by(divisor: i32) -> DivisibleBy {
    DivisibleBy::new(divisor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("123", true)]
    #[case("-123", true)]
    #[case("+7", true)]
    #[case("50000000000000000000000000", true)]
    #[case("123.123", false)]
    #[case("", false)]
    #[case("-", false)]
    #[case("1,000", false)]
    fn test_int(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(int().is_valid(input), expected);
    }

    #[rstest]
    #[case("123.123", true)]
    #[case("123", true)]
    #[case("-0.5", true)]
    #[case("1e10", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("abc", false)]
    fn test_float(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(float().is_valid(input), expected);
    }

    #[rstest]
    #[case("10", 5, true)]
    #[case("10", 2, true)]
    #[case("5", 2, false)]
    #[case("Foo", 2, false)]
    #[case("10", 0, false)]
    #[case("-2147483648", -1, true)]
    #[case("-2147483648", 2, true)]
    #[case("2147483647", -1, true)]
    #[case("-2147483648", 0, false)]
    fn test_divisible_by(#[case] input: &str, #[case] by: i32, #[case] expected: bool) {
        assert_eq!(divisible_by(by).is_valid(input), expected);
    }

    #[test]
    fn test_divisible_by_error() {
        let err = divisible_by(2).validate("5").unwrap_err();
        assert_eq!(err.code, "divisible_by");
        assert_eq!(err.param("divisor"), Some("2"));

        let err = divisible_by(2).validate("five").unwrap_err();
        assert_eq!(err.code, "invalid_format");
    }
}
