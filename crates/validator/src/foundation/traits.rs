//! The validator trait and its combinator methods.

use crate::combinators::{And, Not, Or};
use crate::foundation::ValidationError;

/// A predicate over `Input` that explains its rejections.
///
/// `Input` may be unsized, so string validators take `str` rather than
/// `String`. Implementors only write [`validate`](Validate::validate).
pub trait Validate {
    type Input: ?Sized;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// The verdict without the reason.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        V::validate(self, input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        V::validate(self, input)
    }
}

/// `and`, `or` and `not` as methods on every validator.
///
/// ```rust
/// use sift_validator::prelude::*;
///
/// let handle = length(3, 20).and(alphanumeric());
/// assert!(handle.is_valid("sift42"));
/// assert!(!handle.is_valid("s!"));
///
/// let any_isbn = Isbn::ten().or(Isbn::thirteen());
/// assert!(any_isbn.is_valid("0596004427"));
/// assert!(!any_isbn.is_valid("3423214121"));
/// ```
pub trait ValidateExt: Validate + Sized {
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl Validate for Even {
        type Input = u32;

        fn validate(&self, input: &u32) -> Result<(), ValidationError> {
            if input.is_multiple_of(2) {
                Ok(())
            } else {
                Err(ValidationError::new("even", "odd number"))
            }
        }
    }

    #[test]
    fn is_valid_follows_validate() {
        assert!(Even.is_valid(&4));
        assert!(!Even.is_valid(&5));
    }

    #[test]
    fn borrowed_and_boxed_validators_compose() {
        let boxed: Box<dyn Validate<Input = u32>> = Box::new(Even);
        let either = (&Even).or(boxed.not());
        assert!(either.is_valid(&3));
        assert!(either.is_valid(&4));
        assert!(!Even.and(Even.not()).is_valid(&4));
    }
}
