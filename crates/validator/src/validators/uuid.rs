//! UUID validator.
//!
//! Matches the canonical hyphenated form `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`
//! case-insensitively. Versions 4 and 5 also pin the RFC 4122 variant nibble
//! to `8`, `9`, `A` or `B`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{SelectorError, Validate, ValidationError};

static UUID_ANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12}$").unwrap()
});
static UUID_V3: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9A-F]{8}-[0-9A-F]{4}-3[0-9A-F]{3}-[0-9A-F]{4}-[0-9A-F]{12}$").unwrap()
});
static UUID_V4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9A-F]{8}-[0-9A-F]{4}-4[0-9A-F]{3}-[89AB][0-9A-F]{3}-[0-9A-F]{12}$").unwrap()
});
static UUID_V5: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9A-F]{8}-[0-9A-F]{4}-5[0-9A-F]{3}-[89AB][0-9A-F]{3}-[0-9A-F]{12}$").unwrap()
});

/// Which UUID version to accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UuidVersion {
    /// Name-based, MD5.
    Three,
    /// Random.
    Four,
    /// Name-based, SHA-1.
    Five,
    /// Any version digit.
    #[default]
    Any,
}

impl UuidVersion {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Three => &*UUID_V3,
            Self::Four => &*UUID_V4,
            Self::Five => &*UUID_V5,
            Self::Any => &*UUID_ANY,
        }
    }
}

impl TryFrom<u8> for UuidVersion {
    type Error = SelectorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(SelectorError::unsupported("is_uuid", other)),
        }
    }
}

impl FromStr for UuidVersion {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.strip_prefix('v').unwrap_or(&normalized) {
            "any" => Ok(Self::Any),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            _ => Err(SelectorError::unsupported("is_uuid", s)),
        }
    }
}

impl TryFrom<&str> for UuidVersion {
    type Error = SelectorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Any => "any",
        })
    }
}

/// A UUID of the selected [`UuidVersion`].
///
/// ```rust
/// use sift_validator::foundation::Validate;
/// use sift_validator::validators::{uuid, UuidVersion};
///
/// assert!(uuid(UuidVersion::Four).is_valid("713ae7e3-cb32-45f9-adcb-7c4fa86b90c1"));
/// assert!(!uuid(UuidVersion::Five).is_valid("713ae7e3-cb32-45f9-adcb-7c4fa86b90c1"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uuid {
    version: UuidVersion,
}

impl Uuid {
    #[must_use]
    pub const fn new(version: UuidVersion) -> Self {
        Self { version }
    }

    #[must_use]
    pub const fn version(&self) -> UuidVersion {
        self.version
    }
}

impl Validate for Uuid {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.version.pattern().is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("uuid")
                .with_param("version", self.version.to_string()))
        }
    }
}

#[must_use]
pub const fn uuid(version: UuidVersion) -> Uuid {
    Uuid::new(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UuidVersion::Any, "A987FBC9-4BED-3078-CF07-9141BA07C9F3", true)]
    #[case(UuidVersion::Any, "a987fbc9-4bed-3078-cf07-9141ba07c9f3", true)]
    #[case(UuidVersion::Any, "xxxA987FBC9-4BED-3078-CF07-9141BA07C9F3", false)]
    #[case(UuidVersion::Any, "A987FBC9-4BED-3078-CF07-9141BA07C9F3xxx", false)]
    #[case(UuidVersion::Any, "A987FBC94BED3078CF079141BA07C9F3", false)]
    #[case(UuidVersion::Any, "934859", false)]
    #[case(UuidVersion::Any, "AAAAAAAA-1111-1111-AAAG-111111111111", false)]
    #[case(UuidVersion::Three, "A987FBC9-4BED-3078-CF07-9141BA07C9F3", true)]
    #[case(UuidVersion::Three, "713ae7e3-cb32-45f9-adcb-7c4fa86b90c1", false)]
    #[case(UuidVersion::Four, "713ae7e3-cb32-45f9-adcb-7c4fa86b90c1", true)]
    #[case(UuidVersion::Four, "625e63f3-58f5-40b7-83a1-a72ad31acffb", true)]
    #[case(UuidVersion::Four, "A987FBC9-4BED-3078-CF07-9141BA07C9F3", false)]
    #[case(UuidVersion::Four, "713ae7e3-cb32-45f9-cdcb-7c4fa86b90c1", false)]
    #[case(UuidVersion::Five, "987FBC97-4BED-5078-AF07-9141BA07C9F3", true)]
    #[case(UuidVersion::Five, "987FBC97-4BED-5078-9F07-9141BA07C9F3", true)]
    #[case(UuidVersion::Five, "9c858901-8a57-4791-81fe-4c455b099bc9", false)]
    fn test_uuid(#[case] version: UuidVersion, #[case] input: &str, #[case] expected: bool) {
        assert_eq!(uuid(version).is_valid(input), expected);
    }

    #[test]
    fn test_version_selectors() {
        assert_eq!(UuidVersion::try_from(4_u8), Ok(UuidVersion::Four));
        assert!(UuidVersion::try_from(1_u8).is_err());
        assert_eq!("v5".parse(), Ok(UuidVersion::Five));
        assert_eq!("ANY".parse(), Ok(UuidVersion::Any));

        let err = "7".parse::<UuidVersion>().unwrap_err();
        assert_eq!(err.to_string(), "is_uuid: unsupported version selector `7`");
    }

    #[test]
    fn test_error_carries_version() {
        let err = uuid(UuidVersion::Three).validate("nope").unwrap_err();
        assert_eq!(err.param("version"), Some("3"));
    }
}
