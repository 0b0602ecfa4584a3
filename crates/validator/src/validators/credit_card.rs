//! Credit card number validator with the Luhn algorithm.
//!
//! Only the generic checksum is checked. Issuer prefixes and lengths are not.

use crate::foundation::{Validate, ValidationError};
use crate::validators::checksum::luhn_checksum;
use crate::validators::pattern::is_ascii_digits;

/// A card number that passes the Luhn check once spaces and `-` are removed.
///
/// ```rust
/// use sift_validator::foundation::Validate;
/// use sift_validator::validators::credit_card;
///
/// assert!(credit_card().is_valid("4716-2210-5188-5662"));
/// assert!(credit_card().is_valid("4111 1111 1111 1111"));
/// assert!(!credit_card().is_valid("5398228707871528"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CreditCard;

impl CreditCard {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn extract_digits(input: &str) -> Result<String, ValidationError> {
        let digits: String = input.chars().filter(|c| *c != ' ' && *c != '-').collect();

        if !is_ascii_digits(&digits) {
            return Err(ValidationError::invalid_format("credit card number"));
        }

        Ok(digits)
    }
}

impl Validate for CreditCard {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let digits = Self::extract_digits(input)?;

        if luhn_checksum(&digits) {
            Ok(())
        } else {
            Err(
                ValidationError::new("luhn_checksum", "Card number failed the Luhn checksum")
                    .with_param("digits", digits.len().to_string()),
            )
        }
    }
}

#[must_use]
pub const fn credit_card() -> CreditCard {
    CreditCard::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("375556917985515", true)]
    #[case("4716-2210-5188-5662", true)]
    #[case("4111 1111 1111 1111", true)]
    #[case("5500000000000004", true)]
    #[case("6011111111111117", true)]
    #[case("5398228707871528", false)]
    #[case("4916461583322103", false)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("4111\t1111 1111 1111", false)]
    #[case("foo", false)]
    fn test_credit_card(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(credit_card().is_valid(input), expected);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(credit_card().validate("abc").unwrap_err().code, "invalid_format");
        let err = credit_card().validate("4111111111111112").unwrap_err();
        assert_eq!(err.code, "luhn_checksum");
        assert_eq!(err.param("digits"), Some("16"));
    }
}
