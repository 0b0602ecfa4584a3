//! Disjunction.
//!
//! ```rust
//! use sift_validator::combinators::Or;
//! use sift_validator::foundation::Validate;
//! use sift_validator::validators::Isbn;
//!
//! let any_isbn = Or::new(Isbn::ten(), Isbn::thirteen());
//! assert!(any_isbn.is_valid("0-596-00442-7"));
//! assert!(any_isbn.is_valid("978-3-8362-2119-1"));
//! assert!(!any_isbn.is_valid("3423214121"));
//! ```

use crate::foundation::{Validate, ValidationError};

/// Passes when either side passes; `right` only runs after `left` fails.
///
/// When both reject, the error is `or_failed` with the two branch errors
/// nested in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Err(first) = self.left.validate(input) else {
            return Ok(());
        };
        let Err(second) = self.right.validate(input) else {
            return Ok(());
        };
        Err(ValidationError::new("or_failed", "No alternative accepted the input")
            .with_nested(vec![first, second]))
    }
}

/// `left.or(right)` without the extension trait.
pub const fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{IpVersion, alpha, ip, numeric};
    use pretty_assertions::assert_eq;

    #[test]
    fn either_branch_accepts() {
        let word_or_number = or(alpha(), numeric());
        assert!(word_or_number.is_valid("abc"));
        assert!(word_or_number.is_valid("123"));
    }

    #[test]
    fn both_branch_errors_are_kept() {
        let err = Or::new(alpha(), numeric()).validate("abc123").unwrap_err();
        let codes: Vec<_> = err.flatten().iter().map(|e| e.code.to_string()).collect();
        assert_eq!(codes, ["or_failed", "alpha", "numeric"]);
    }

    #[test]
    fn three_way_chain_nests_left() {
        let host = ip(IpVersion::Four).or(ip(IpVersion::Six)).or(alpha());
        assert!(host.is_valid("10.0.0.1"));
        assert!(host.is_valid("fe80::1"));
        assert!(host.is_valid("localhost"));

        let err = host.validate("local-host").unwrap_err();
        assert_eq!(err.nested[0].code, "or_failed");
        assert_eq!(err.nested[1].code, "alpha");
    }
}
