//! ISBN validators
//!
//! Separators (whitespace and `-`) are stripped before the checksum runs, so
//! `0-596-00442-7` and `0596004427` get the same verdict.

use std::fmt;
use std::str::FromStr;

use crate::foundation::{SelectorError, Validate, ValidateExt, ValidationError};
use crate::validators::checksum::{isbn10_checksum, isbn13_checksum, remove_separators};

// ============================================================================
// VERSION SELECTOR
// ============================================================================

/// Which ISBN format to accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IsbnVersion {
    /// ISBN-10 only.
    Ten,
    /// ISBN-13 only.
    Thirteen,
    /// Either format.
    #[default]
    Any,
}

impl TryFrom<u8> for IsbnVersion {
    type Error = SelectorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(Self::Ten),
            13 => Ok(Self::Thirteen),
            other => Err(SelectorError::unsupported("is_isbn", other)),
        }
    }
}

impl FromStr for IsbnVersion {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "10" => Ok(Self::Ten),
            "13" => Ok(Self::Thirteen),
            _ => Err(SelectorError::unsupported("is_isbn", s)),
        }
    }
}

impl TryFrom<&str> for IsbnVersion {
    type Error = SelectorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for IsbnVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ten => "10",
            Self::Thirteen => "13",
            Self::Any => "any",
        })
    }
}

// ============================================================================
// SINGLE-FORMAT VALIDATORS
// ============================================================================

crate::validator! {
    /// ISBN-10 after separator removal.
    pub Isbn10 for str;
    rule(input) { isbn10_checksum(&remove_separators(input)) }
    error(input) { ValidationError::new("isbn10_checksum", "Input is not a valid ISBN-10") }
}

crate::validator! {
    /// ISBN-13 after separator removal.
    pub Isbn13 for str;
    rule(input) { isbn13_checksum(&remove_separators(input)) }
    error(input) { ValidationError::new("isbn13_checksum", "Input is not a valid ISBN-13") }
}

// ============================================================================
// ISBN VALIDATOR
// ============================================================================

/// An ISBN of the selected [`IsbnVersion`].
///
/// # Examples
///
/// ```rust
/// use sift_validator::foundation::Validate;
/// use sift_validator::validators::{Isbn, IsbnVersion};
///
/// assert!(Isbn::ten().is_valid("3-8362-2119-5"));
/// assert!(Isbn::thirteen().is_valid("978-4-87311-368-5"));
/// assert!(Isbn::new(IsbnVersion::Any).is_valid("9783836221191"));
/// assert!(!Isbn::any().is_valid("9783836221190"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Isbn {
    version: IsbnVersion,
}

impl Isbn {
    #[must_use]
    pub const fn new(version: IsbnVersion) -> Self {
        Self { version }
    }

    #[must_use]
    pub const fn ten() -> Self {
        Self::new(IsbnVersion::Ten)
    }

    #[must_use]
    pub const fn thirteen() -> Self {
        Self::new(IsbnVersion::Thirteen)
    }

    #[must_use]
    pub const fn any() -> Self {
        Self::new(IsbnVersion::Any)
    }

    #[must_use]
    pub const fn version(&self) -> IsbnVersion {
        self.version
    }
}

impl Validate for Isbn {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self.version {
            IsbnVersion::Ten => Isbn10.validate(input),
            IsbnVersion::Thirteen => Isbn13.validate(input),
            IsbnVersion::Any => Isbn10.or(Isbn13).validate(input),
        }
    }
}

#[must_use]
pub const fn isbn(version: IsbnVersion) -> Isbn {
    Isbn::new(version)
}

// ============================================================================
// TESTS
// ============================================================================
