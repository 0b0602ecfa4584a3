//! Negation.
//!
//! ```rust
//! use sift_validator::combinators::Not;
//! use sift_validator::foundation::Validate;
//! use sift_validator::validators::multibyte;
//!
//! let single_byte_only = Not::new(multibyte());
//! assert!(single_byte_only.is_valid("plain ascii"));
//! assert!(!single_byte_only.is_valid("ｆｕｌｌ"));
//! ```

use crate::foundation::{Validate, ValidationError};

/// Passes exactly when the wrapped validator fails. The inner error is
/// discarded; an accepted input becomes `not_failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Not<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.inner.is_valid(input) {
            Err(ValidationError::new(
                "not_failed",
                "Input matched a rule it must not match",
            ))
        } else {
            Ok(())
        }
    }
}

/// `validator.not()` without the extension trait.
pub const fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}
