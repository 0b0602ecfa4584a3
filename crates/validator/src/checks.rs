//! Flat boolean checks.
//!
//! One function per predicate. Each builds the matching validator from
//! [`validators`](crate::validators) and returns its verdict, so a rejected
//! input is always a plain `false`.
//!
//! The `try_is_*` functions take a raw version selector (`10`, `"v4"`, ...)
//! and report an unknown one as [`SelectorError`] instead of a verdict.
//!
//! ```rust
//! use sift_validator::checks;
//!
//! assert!(checks::is_fqdn("foo--bar.com"));
//! assert_eq!(checks::try_is_isbn("9783836221191", 13_u8), Ok(true));
//! assert!(checks::try_is_uuid("not-a-uuid", 2_u8).is_err());
//! ```

use chrono::NaiveDateTime;

use crate::foundation::{SelectorError, Validate};
use crate::validators::{
    self, FqdnOptions, IpVersion, IsbnVersion, UrlOptions, UuidVersion,
};

// ============================================================================
// CHECKSUMS
// ============================================================================

/// Luhn check after removing spaces and `-`.
#[must_use]
pub fn is_credit_card(input: &str) -> bool {
    validators::credit_card().is_valid(input)
}

#[must_use]
pub fn is_isbn(input: &str, version: IsbnVersion) -> bool {
    validators::isbn(version).is_valid(input)
}

/// Like [`is_isbn`] with the version given as `10`, `13`, `"any"`, ...
///
/// # Errors
///
/// [`SelectorError`] if `version` names no ISBN format.
pub fn try_is_isbn<V>(input: &str, version: V) -> Result<bool, SelectorError>
where
    V: TryInto<IsbnVersion, Error = SelectorError>,
{
    Ok(is_isbn(input, version.try_into()?))
}

// ============================================================================
// STRUCTURE
// ============================================================================

#[must_use]
pub fn is_fqdn(input: &str) -> bool {
    validators::fqdn().is_valid(input)
}

#[must_use]
pub fn is_fqdn_with(input: &str, options: &FqdnOptions) -> bool {
    validators::Fqdn::with_options(*options).is_valid(input)
}

#[must_use]
pub fn is_url(input: &str) -> bool {
    validators::url().is_valid(input)
}

#[must_use]
pub fn is_url_with(input: &str, options: &UrlOptions) -> bool {
    validators::Url::with_options(options.clone()).is_valid(input)
}

// ============================================================================
// TABLES
// ============================================================================

/// `false` for an unknown locale.
#[must_use]
pub fn is_mobile_phone(input: &str, locale: &str) -> bool {
    validators::mobile_phone(locale).is_valid(input)
}

#[must_use]
pub fn is_uuid(input: &str, version: UuidVersion) -> bool {
    validators::uuid(version).is_valid(input)
}

/// Like [`is_uuid`] with the version given as `4`, `"v5"`, `"any"`, ...
///
/// # Errors
///
/// [`SelectorError`] if `version` names no UUID version.
pub fn try_is_uuid<V>(input: &str, version: V) -> Result<bool, SelectorError>
where
    V: TryInto<UuidVersion, Error = SelectorError>,
{
    Ok(is_uuid(input, version.try_into()?))
}

// ============================================================================
// FORMATS
// ============================================================================

#[must_use]
pub fn is_email(input: &str) -> bool {
    validators::email().is_valid(input)
}

#[must_use]
pub fn is_ip(input: &str, version: IpVersion) -> bool {
    validators::ip(version).is_valid(input)
}

/// Like [`is_ip`] with the version given as `4`, `"6"`, `"any"`, ...
///
/// # Errors
///
/// [`SelectorError`] if `version` names no address family.
pub fn try_is_ip<V>(input: &str, version: V) -> Result<bool, SelectorError>
where
    V: TryInto<IpVersion, Error = SelectorError>,
{
    Ok(is_ip(input, version.try_into()?))
}

#[must_use]
pub fn is_base64(input: &str) -> bool {
    validators::base64().is_valid(input)
}

/// A JSON object. Use [`Json::allow_primitives`](validators::Json::allow_primitives)
/// for other top-level values.
#[must_use]
pub fn is_json(input: &str) -> bool {
    validators::json().is_valid(input)
}

#[must_use]
pub fn is_date(input: &str) -> bool {
    validators::date().is_valid(input)
}

#[must_use]
pub fn is_after(input: &str, reference: NaiveDateTime) -> bool {
    validators::after(reference).is_valid(input)
}

#[must_use]
pub fn is_before(input: &str, reference: NaiveDateTime) -> bool {
    validators::before(reference).is_valid(input)
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

#[must_use]
pub fn is_alpha(input: &str) -> bool {
    validators::alpha().is_valid(input)
}

#[must_use]
pub fn is_numeric(input: &str) -> bool {
    validators::numeric().is_valid(input)
}

#[must_use]
pub fn is_alphanumeric(input: &str) -> bool {
    validators::alphanumeric().is_valid(input)
}

#[must_use]
pub fn is_hexadecimal(input: &str) -> bool {
    validators::hexadecimal().is_valid(input)
}

#[must_use]
pub fn is_hex_color(input: &str) -> bool {
    validators::hex_color().is_valid(input)
}

#[must_use]
pub fn is_mongo_id(input: &str) -> bool {
    validators::mongo_id().is_valid(input)
}

#[must_use]
pub fn is_lowercase(input: &str) -> bool {
    validators::lowercase().is_valid(input)
}

#[must_use]
pub fn is_uppercase(input: &str) -> bool {
    validators::uppercase().is_valid(input)
}

#[must_use]
pub fn is_ascii(input: &str) -> bool {
    validators::ascii().is_valid(input)
}

#[must_use]
pub fn is_multibyte(input: &str) -> bool {
    validators::multibyte().is_valid(input)
}

#[must_use]
pub fn is_full_width(input: &str) -> bool {
    validators::full_width().is_valid(input)
}

#[must_use]
pub fn is_half_width(input: &str) -> bool {
    validators::half_width().is_valid(input)
}

#[must_use]
pub fn is_variable_width(input: &str) -> bool {
    validators::variable_width().is_valid(input)
}

#[must_use]
pub fn is_surrogate_pair(input: &str) -> bool {
    validators::surrogate_pair().is_valid(input)
}

#[must_use]
pub fn is_int(input: &str) -> bool {
    validators::int().is_valid(input)
}

#[must_use]
pub fn is_float(input: &str) -> bool {
    validators::float().is_valid(input)
}

#[must_use]
pub fn is_divisible_by(input: &str, divisor: i32) -> bool {
    validators::divisible_by(divisor).is_valid(input)
}

#[must_use]
pub fn is_length(input: &str, min: usize, max: usize) -> bool {
    validators::length(min, max).is_valid(input)
}

/// `max` of `None` means no upper bound.
#[must_use]
pub fn is_byte_length(input: &str, min: usize, max: Option<usize>) -> bool {
    match max {
        Some(max) => validators::byte_length(min, max).is_valid(input),
        None => validators::ByteLength::at_least(min).is_valid(input),
    }
}

// ============================================================================
// CONTENT
// ============================================================================

#[must_use]
pub fn contains(input: &str, needle: &str) -> bool {
    input.contains(needle)
}

#[must_use]
pub fn equals(input: &str, expected: &str) -> bool {
    input == expected
}

#[must_use]
pub fn is_in(input: &str, options: &[&str]) -> bool {
    options.contains(&input)
}

#[must_use]
pub fn is_null(input: &str) -> bool {
    validators::is_null().is_valid(input)
}

/// # Errors
///
/// [`regex::Error`] if `pattern` does not compile.
pub fn matches(input: &str, pattern: &str) -> Result<bool, regex::Error> {
    Ok(validators::matches(pattern)?.is_valid(input))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_facade() {
        assert!(is_credit_card("375556917985515"));
        assert!(!is_credit_card("5398228707871528"));
        assert!(is_isbn("0-596-00442-7", IsbnVersion::Ten));
        assert!(!is_isbn("3423214121", IsbnVersion::Any));
    }

    #[test]
    fn selector_facade() {
        assert_eq!(try_is_isbn("9783836221191", 13_u8), Ok(true));
        assert_eq!(try_is_isbn("9783836221191", "10"), Ok(false));
        assert_eq!(try_is_isbn("9783836221191", "any"), Ok(true));
        assert!(matches!(
            try_is_isbn("9783836221191", 12_u8),
            Err(SelectorError::UnsupportedVersion { operation: "is_isbn", .. })
        ));

        assert_eq!(
            try_is_uuid("987FBC97-4BED-5078-AF07-9141BA07C9F3", 5_u8),
            Ok(true)
        );
        assert!(try_is_uuid("987FBC97-4BED-5078-AF07-9141BA07C9F3", 1_u8).is_err());

        assert_eq!(try_is_ip("::1", 6_u8), Ok(true));
        assert_eq!(try_is_ip("::1", "4"), Ok(false));
        assert!(try_is_ip("::1", 5_u8).is_err());
    }

    #[test]
    fn structure_facade() {
        assert!(is_fqdn("domain.com"));
        assert!(!is_fqdn("test_.com"));
        let options = FqdnOptions {
            allow_underscores: true,
            ..FqdnOptions::default()
        };
        assert!(is_fqdn_with("test_.com", &options));

        assert!(is_url("http://foobar.com"));
        let options = UrlOptions {
            host_blacklist: Some(vec!["foobar.com".into()]),
            ..UrlOptions::default()
        };
        assert!(!is_url_with("http://foobar.com", &options));
    }

    #[test]
    fn phone_facade() {
        assert!(is_mobile_phone("15323456787", "zh-CN"));
        assert!(!is_mobile_phone("15323456787", "xx-ZZ"));
    }

    #[test]
    fn character_class_facade() {
        assert!(is_alpha("abc"));
        assert!(is_numeric("123"));
        assert!(is_alphanumeric("a1"));
        assert!(is_hexadecimal("ff"));
        assert!(is_hex_color("#fff"));
        assert!(is_mongo_id("507f1f77bcf86cd799439011"));
        assert!(is_lowercase("abc"));
        assert!(is_uppercase("ABC"));
        assert!(is_ascii("abc"));
        assert!(is_multibyte("ü"));
        assert!(is_full_width("ｆｕｌｌ"));
        assert!(is_half_width("half"));
        assert!(is_variable_width("ｆｕｌｌ half"));
        assert!(is_surrogate_pair("𠮷"));
        assert!(is_int("-12"));
        assert!(is_float("1.5"));
        assert!(is_divisible_by("9", 3));
        assert!(is_length("abc", 1, 3));
        assert!(is_byte_length("ü", 2, Some(2)));
        assert!(is_byte_length("abcdef", 3, None));
    }

    #[test]
    fn content_facade() {
        assert!(contains("foobar", "oba"));
        assert!(equals("a", "a"));
        assert!(is_in("b", &["a", "b"]));
        assert!(is_null(""));
        assert_eq!(matches("abc", "^a"), Ok(true));
        assert!(matches("abc", "(").is_err());
    }

    #[test]
    fn format_facade() {
        assert!(is_email("foo@bar.com"));
        assert!(is_ip("127.0.0.1", IpVersion::Four));
        assert!(is_base64("Zm9v"));
        assert!(is_json(r#"{"a": 1}"#));
        assert!(is_date("2002-07-15"));
        assert!(is_uuid("A987FBC9-4BED-3078-CF07-9141BA07C9F3", UuidVersion::Three));

        let reference = crate::validators::date::parse_date("2011-08-03").unwrap();
        assert!(is_after("2011-08-04", reference));
        assert!(is_before("2011-08-02", reference));
    }
}
