//! Date validators.
//!
//! [`parse_date`] tries RFC 3339, then RFC 2822, then a fixed list of common
//! layouts. Inputs carrying an offset are converted to UTC; inputs without
//! one are taken as they are. A bare date means midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::foundation::{Validate, ValidationError};

const DATE_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
];

const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parses `input` as a date or date-time, or returns `None`.
///
/// ```
/// use sift_validator::validators::date::parse_date;
///
/// assert!(parse_date("2002-07-15T10:00:00Z").is_some());
/// assert!(parse_date("July 15, 2002").is_some());
/// assert!(parse_date("2023-02-29").is_none());
/// ```
#[must_use]
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.naive_utc());
    }

    DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
        .or_else(|| {
            DATE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(input, layout).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

fn unparseable() -> ValidationError {
    ValidationError::invalid_format("date")
}

// ============================================================================
// DATE
// ============================================================================

crate::validator! {
    /// Input parses as a date or date-time.
    pub Date for str;
    rule(input) { parse_date(input).is_some() }
    error(input) { unparseable() }
    fn date();
}

// ============================================================================
// AFTER / BEFORE
// ============================================================================

/// Input parses to a moment strictly later than `reference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct After {
    reference: NaiveDateTime,
}

impl After {
    #[must_use]
    pub const fn new(reference: NaiveDateTime) -> Self {
        Self { reference }
    }

    /// Compares against the current UTC time, read once here.
    #[must_use]
    pub fn now() -> Self {
        Self::new(Utc::now().naive_utc())
    }
}

impl Validate for After {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let parsed = parse_date(input).ok_or_else(unparseable)?;
        if parsed > self.reference {
            Ok(())
        } else {
            Err(ValidationError::new("date_not_after", "Date is not after the reference")
                .with_param("reference", self.reference.to_string()))
        }
    }
}

/// Input parses to a moment strictly earlier than `reference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Before {
    reference: NaiveDateTime,
}

impl Before {
    #[must_use]
    pub const fn new(reference: NaiveDateTime) -> Self {
        Self { reference }
    }

    /// Compares against the current UTC time, read once here.
    #[must_use]
    pub fn now() -> Self {
        Self::new(Utc::now().naive_utc())
    }
}

impl Validate for Before {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let parsed = parse_date(input).ok_or_else(unparseable)?;
        if parsed < self.reference {
            Ok(())
        } else {
            Err(ValidationError::new("date_not_before", "Date is not before the reference")
                .with_param("reference", self.reference.to_string()))
        }
    }
}

#[must_use]
pub const fn after(reference: NaiveDateTime) -> After {
    After::new(reference)
}

#[must_use]
pub const fn before(reference: NaiveDateTime) -> Before {
    Before::new(reference)
}
