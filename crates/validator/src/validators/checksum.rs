//! Weighted-digit checksum routines.
//!
//! Used by [`CreditCard`](super::CreditCard) and [`Isbn`](super::Isbn). Every
//! routine returns `false` on malformed input instead of panicking; none of
//! them index a byte they have not first checked to be an ASCII digit.

use crate::validators::pattern::is_ascii_digits;

/// Numeric value of an ASCII digit byte. Callers check the byte first.
fn digit(byte: u8) -> u32 {
    u32::from(byte - b'0')
}

/// Removes every whitespace char and `-`.
///
/// ```rust
/// use sift_validator::validators::checksum::remove_separators;
///
/// assert_eq!(remove_separators("978-3 8362\t2119-1"), "9783836221191");
/// ```
#[must_use]
pub fn remove_separators(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Luhn (mod 10) check over a string of ASCII digits.
///
/// Counting from the rightmost digit at position 0, digits at odd positions
/// are doubled and a two-digit product is folded to the sum of its digits.
/// The total must be a multiple of 10. Empty input and any non-digit fail.
///
/// ```rust
/// use sift_validator::validators::checksum::luhn_checksum;
///
/// assert!(luhn_checksum("375556917985515"));
/// assert!(!luhn_checksum("5398228707871528"));
/// assert!(!luhn_checksum("4111-1111-1111-1111"));
/// ```
#[must_use]
pub fn luhn_checksum(digits: &str) -> bool {
    if !is_ascii_digits(digits) {
        return false;
    }

    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let product = digit(b) * if i % 2 == 1 { 2 } else { 1 };
            product / 10 + product % 10
        })
        .sum();

    sum.is_multiple_of(10)
}

/// ISBN-10 check: nine digits then a digit or an uppercase `X` (worth 10).
///
/// The char at position `i` is weighted by `i + 1`; the sum must be a
/// multiple of 11. Lowercase `x` is rejected.
#[must_use]
pub fn isbn10_checksum(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || !bytes[..9].iter().all(u8::is_ascii_digit) {
        return false;
    }

    let check = match bytes[9] {
        b'X' => 10,
        b if b.is_ascii_digit() => digit(b),
        _ => return false,
    };

    let sum: u32 = bytes[..9]
        .iter()
        .zip(1..)
        .map(|(&b, weight)| digit(b) * weight)
        .sum::<u32>()
        + check * 10;

    sum.is_multiple_of(11)
}

/// ISBN-13 check: thirteen digits, weights alternating 1 and 3 over the
/// first twelve, and the last digit equal to `(10 - sum % 10) % 10`.
#[must_use]
pub fn isbn13_checksum(input: &str) -> bool {
    if input.len() != 13 || !is_ascii_digits(input) {
        return false;
    }

    let bytes = input.as_bytes();
    let sum: u32 = bytes[..12]
        .iter()
        .enumerate()
        .map(|(i, &b)| digit(b) * if i % 2 == 1 { 3 } else { 1 })
        .sum();

    digit(bytes[12]) == (10 - sum % 10) % 10
}
