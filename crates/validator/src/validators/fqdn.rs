//! Fully qualified domain name validator.
//!
//! Rules, in the order they are applied:
//! - With `allow_trailing_dot`, exactly one trailing `.` is dropped
//! - The name is split on `.` into labels
//! - With `require_tld`, there must be at least two labels and the last one
//!   (lower-cased) must be two or more letters / non-ASCII chars, or an `xn`
//!   punycode label
//! - Every other label must be non-empty, made of ASCII letters, digits, `-`
//!   or chars from U+00A1 up, must not start or end with `-` and must not
//!   contain `---`
//! - With `allow_underscores`, `__` is rejected and single `_` are ignored
//!
//! Punycode is never decoded.

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// OPTIONS
// ============================================================================

/// Switches for [`Fqdn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FqdnOptions {
    /// Require a top-level label. Default `true`.
    pub require_tld: bool,
    /// Accept `_` inside labels. Default `false`.
    pub allow_underscores: bool,
    /// Accept one trailing `.`. Default `false`.
    pub allow_trailing_dot: bool,
}

impl Default for FqdnOptions {
    fn default() -> Self {
        Self {
            require_tld: true,
            allow_underscores: false,
            allow_trailing_dot: false,
        }
    }
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

fn is_high_char(c: char) -> bool {
    c >= '\u{a1}'
}

fn is_tld(tld: &str) -> bool {
    let tld = tld.to_lowercase();

    if let Some(rest) = tld.strip_prefix("xn") {
        if rest.chars().count() >= 2
            && rest
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return true;
        }
    }

    tld.chars().count() >= 2
        && tld
            .chars()
            .all(|c| c.is_ascii_lowercase() || is_high_char(c))
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || is_high_char(c)
}

// ============================================================================
// FQDN VALIDATOR
// ============================================================================

/// Validates a domain name under [`FqdnOptions`].
///
/// # Examples
///
/// ```
/// use sift_validator::foundation::Validate;
/// use sift_validator::validators::fqdn;
///
/// assert!(fqdn().is_valid("domain.com"));
/// assert!(fqdn().is_valid("foo--bar.com"));
/// assert!(!fqdn().is_valid("_.com"));
/// assert!(fqdn().allow_underscores(true).is_valid("test_.com"));
/// assert!(!fqdn().is_valid("example.com."));
/// assert!(fqdn().allow_trailing_dot(true).is_valid("example.com."));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fqdn {
    options: FqdnOptions,
}

impl Fqdn {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_options(options: FqdnOptions) -> Self {
        Self { options }
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn require_tld(mut self, yes: bool) -> Self {
        self.options.require_tld = yes;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_underscores(mut self, yes: bool) -> Self {
        self.options.allow_underscores = yes;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_trailing_dot(mut self, yes: bool) -> Self {
        self.options.allow_trailing_dot = yes;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &FqdnOptions {
        &self.options
    }

    fn check_label(&self, label: &str) -> Result<(), ValidationError> {
        let stripped;
        let label = if self.options.allow_underscores {
            if label.contains("__") {
                return Err(label_error(label, "must not contain '__'"));
            }
            stripped = label.replace('_', "");
            stripped.as_str()
        } else {
            label
        };

        if label.is_empty() {
            return Err(ValidationError::new(
                "empty_label",
                "Domain labels must not be empty",
            ));
        }

        if let Some(ch) = label.chars().find(|c| !is_label_char(*c)) {
            return Err(label_error(label, &format!("contains invalid character '{ch}'")));
        }

        if label.starts_with('-') {
            return Err(label_error(label, "must not start with a hyphen"));
        }

        if label.ends_with('-') {
            return Err(label_error(label, "must not end with a hyphen"));
        }

        if label.contains("---") {
            return Err(label_error(label, "must not contain '---'"));
        }

        Ok(())
    }
}

fn label_error(label: &str, reason: &str) -> ValidationError {
    ValidationError::new("invalid_label", format!("Label '{label}' {reason}"))
        .with_param("label", label.to_owned())
}

impl Validate for Fqdn {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let name = if self.options.allow_trailing_dot {
            input.strip_suffix('.').unwrap_or(input)
        } else {
            input
        };

        let mut labels: Vec<&str> = name.split('.').collect();

        if self.options.require_tld {
            if labels.len() < 2 {
                return Err(ValidationError::new(
                    "missing_tld",
                    "Domain name must have a top-level label",
                ));
            }

            let tld = labels.pop().unwrap_or_default();
            if !is_tld(tld) {
                return Err(ValidationError::new(
                    "invalid_tld",
                    format!("'{tld}' is not a valid top-level label"),
                )
                .with_param("tld", tld.to_owned()));
            }
        }

        labels.iter().try_for_each(|label| self.check_label(label))
    }
}

/// Creates an [`Fqdn`] validator with default options.
#[must_use]
pub fn fqdn() -> Fqdn {
    Fqdn::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("domain.com")]
    #[case("dom.plato")]
    #[case("a.domain.co")]
    #[case("foo--bar.com")]
    #[case("xn--froschgrn-x9a.com")]
    #[case("rebecca.blackfriday")]
    #[case("EXAMPLE.COM")]
    #[case("例子.测试")]
    #[case("example.xn--p1ai")]
    fn valid_default(#[case] input: &str) {
        assert!(fqdn().is_valid(input), "{input}");
    }

    #[rstest]
    #[case("")]
    #[case("com")]
    #[case("abc")]
    #[case("256.0.0.0")]
    #[case("_.com")]
    #[case("*.some.com")]
    #[case("s!ome.com")]
    #[case("domain.com/")]
    #[case("/more.com")]
    #[case("domain.c")]
    #[case("domain.com.")]
    #[case("-domain.com")]
    #[case("domain-.com")]
    #[case("a---b.com")]
    #[case("domain..com")]
    #[case("test_.com")]
    #[case("dom ain.com")]
    fn invalid_default(#[case] input: &str) {
        assert!(!fqdn().is_valid(input), "{input}");
    }

    #[test]
    fn underscores() {
        let v = fqdn().allow_underscores(true);
        assert!(v.is_valid("test_.com"));
        assert!(v.is_valid("_dmarc.example.com"));
        assert!(!v.is_valid("a__b.com"));
        assert!(!v.is_valid("_.com"));
    }

    #[test]
    fn trailing_dot_strips_only_one() {
        let v = fqdn().allow_trailing_dot(true);
        assert!(v.is_valid("example.com."));
        assert!(!v.is_valid("example.com.."));
    }

    #[test]
    fn without_tld() {
        let v = fqdn().require_tld(false);
        assert!(v.is_valid("localhost"));
        assert!(v.is_valid("a.b.c1"));
        assert!(!v.is_valid(""));
        assert!(!v.is_valid("-host"));
    }

    #[test]
    fn error_codes() {
        assert_eq!(fqdn().validate("com").unwrap_err().code, "missing_tld");
        assert_eq!(fqdn().validate("a.c0m").unwrap_err().code, "invalid_tld");
        let err = fqdn().validate("-a.com").unwrap_err();
        assert_eq!(err.code, "invalid_label");
        assert_eq!(err.param("label"), Some("-a"));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: FqdnOptions =
            serde_json::from_str(r#"{ "allow_underscores": true }"#).unwrap();
        assert!(options.require_tld);
        assert!(options.allow_underscores);
        assert!(!options.allow_trailing_dot);
    }
}
