//! Base64 string validator.
//!
//! The input is first passed through [`sanitize`], which drops line breaks
//! and lower-cases. The alphabet check then runs on the sanitized text, so
//! upper- and lower-case letters are interchangeable and MIME-style wrapped
//! input passes.

use crate::foundation::{Validate, ValidationError};

/// Removes `\r` and `\n` and lower-cases what is left.
///
/// Applying it twice gives the same result as applying it once.
///
/// ```
/// use sift_validator::validators::base64::sanitize;
///
/// assert_eq!(sanitize("Zm9v\r\nYmFy"), "zm9vymfy");
/// assert_eq!(sanitize(&sanitize("Zm9v\r\nYmFy")), sanitize("Zm9v\r\nYmFy"));
/// ```
#[must_use]
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_body_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+' || c == '/'
}

/// Standard-alphabet base64 with `=` padding.
///
/// After sanitizing, the length must be a non-zero multiple of 4 and at
/// most the last two chars may be `=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Base64;

impl Validate for Base64 {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let text = sanitize(input);

        if text.is_empty() || !text.len().is_multiple_of(4) {
            return Err(ValidationError::new(
                "base64_length",
                "Base64 length must be a non-zero multiple of 4",
            )
            .with_param("actual", text.len().to_string()));
        }

        let body = text.trim_end_matches('=');
        if text.len() - body.len() > 2 {
            return Err(ValidationError::new("base64_padding", "At most two '=' pad characters"));
        }

        if let Some(c) = body.chars().find(|c| !is_body_char(*c)) {
            return Err(ValidationError::invalid_format("base64 string")
                .with_param("char", c.to_string()));
        }

        Ok(())
    }
}

#[must_use]
pub const fn base64() -> Base64 {
    Base64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Zg==")]
    #[case("Zm8=")]
    #[case("Zm9v")]
    #[case("Zm9vYg==")]
    #[case("Zm9vYmE=")]
    #[case("Zm9vYmFy")]
    #[case("U3VzcGVuZGlzc2UgbGVjdHVzIGxlbw==")]
    #[case("Zm9v\r\nYmFy")]
    #[case("dGVzdA+/")]
    fn valid(#[case] input: &str) {
        assert!(base64().is_valid(input), "{input}");
    }

    #[rstest]
    #[case("")]
    #[case("\r\n")]
    #[case("12345")]
    #[case("Vml2YW11cyBmZXJtZtesting123")]
    #[case("Zg=")]
    #[case("Z===")]
    #[case("Zm=8")]
    #[case("=m9vYg==")]
    #[case("Zm9v YmFy")]
    #[case("Zm9v_mFy")]
    fn invalid(#[case] input: &str) {
        assert!(!base64().is_valid(input), "{input}");
    }

    #[test]
    fn error_codes() {
        assert_eq!(base64().validate("abc").unwrap_err().code, "base64_length");
        assert_eq!(base64().validate("a===").unwrap_err().code, "base64_padding");
        let err = base64().validate("ab-c").unwrap_err();
        assert_eq!(err.param("char"), Some("-"));
    }
}
