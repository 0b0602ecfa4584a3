//! Mobile phone numbers keyed by locale.
//!
//! The locale table is built once on first use and never mutated. Lookup is
//! an exact, case-sensitive match on the tag (`"en-US"`, not `"en-us"` or
//! `"en"`). An unknown tag is a rejected input, not an error.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

const LOCALE_PATTERNS: &[(&str, &str)] = &[
    ("de-DE", r"^(\+?49[ \.\-])?([\(]{1}[0-9]{1,6}[\)])?([0-9 \.\-/]{3,20})((x|ext|extension)[ ]?[0-9]{1,4})?$"),
    ("el-GR", r"^(\+30)?((2\d{9})|(69\d{8}))$"),
    ("en-AU", r"^(\+?61|0)4(\d{8})$"),
    ("en-GB", r"^(\+?44|0)7\d{9}$"),
    ("en-HK", r"^(\+?852\-?)?[569]\d{3}\-?\d{4}$"),
    ("en-IN", r"^(\+?91|0)?[789]\d{9}$"),
    ("en-NZ", r"^(\+?64|0)2\d{7,9}$"),
    ("en-US", r"^(\+?1)?[2-9]\d{2}[2-9](?:[02-9]\d|1[02-9])\d{4}$"),
    ("en-ZA", r"^(\+?27|0)(\d{9})$"),
    ("es-ES", r"^(\+?34)?(6\d{1}|7[1234])\d{7}$"),
    ("fr-FR", r"^(\+?33|0)(6|7)\d{8}$"),
    ("it-IT", r"^(\+?39)?\s?3\d{2} ?\d{6,7}$"),
    ("nb-NO", r"^(\+?47)?[49]\d{7}$"),
    ("pl-PL", r"^(\+?48)? ?[5-8]\d ?\d{3} ?\d{2} ?\d{2}$"),
    ("pt-PT", r"^(\+351)?9[1236]\d{7}$"),
    ("ru-RU", r"^(\+?7|8)?9\d{9}$"),
    ("zh-CN", r"^(\+?0?86\-?)?1[345789][0-9]{9}$"),
    ("zh-TW", r"^(\+?886\-?|0)?9\d{8}$"),
];

static PHONE_PATTERNS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    LOCALE_PATTERNS
        .iter()
        .map(|(locale, pattern)| (*locale, Regex::new(pattern).unwrap()))
        .collect()
});

/// Locale tags with a known pattern, sorted.
///
/// ```rust
/// use sift_validator::validators::supported_locales;
///
/// assert!(supported_locales().contains(&"zh-CN"));
/// assert!(!supported_locales().contains(&"xx-ZZ"));
/// ```
#[must_use]
pub fn supported_locales() -> Vec<&'static str> {
    LOCALE_PATTERNS.iter().map(|(locale, _)| *locale).collect()
}

/// A mobile number in the format of one locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MobilePhone {
    locale: String,
}

impl MobilePhone {
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Validate for MobilePhone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let Some(pattern) = PHONE_PATTERNS.get(self.locale.as_str()) else {
            tracing::debug!(locale = %self.locale, "no mobile phone pattern for locale");
            return Err(ValidationError::new("unknown_locale", "No phone pattern for this locale")
                .with_param("locale", self.locale.clone()));
        };

        if pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("mobile phone number")
                .with_param("locale", self.locale.clone()))
        }
    }
}

#[must_use]
pub fn mobile_phone(locale: impl Into<String>) -> MobilePhone {
    MobilePhone::new(locale)
}

// ============================================================================
// TESTS
// ============================================================================
