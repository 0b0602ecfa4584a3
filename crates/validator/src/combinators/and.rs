//! Conjunction.
//!
//! ```rust
//! use sift_validator::combinators::And;
//! use sift_validator::foundation::Validate;
//! use sift_validator::validators::{hexadecimal, length};
//!
//! // MongoDB ObjectId: 24 hex characters.
//! let object_id = And::new(hexadecimal(), length(24, 24));
//! assert!(object_id.is_valid("507f1f77bcf86cd799439011"));
//! assert!(!object_id.is_valid("507f1f77bcf86cd79943901z"));
//! ```

use crate::foundation::{Validate, ValidationError};

/// Passes when `left` and then `right` pass. `right` never sees input that
/// `left` rejected, and the first error is returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left
            .validate(input)
            .and_then(|()| self.right.validate(input))
    }
}

/// `left.and(right)` without the extension trait.
pub const fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
