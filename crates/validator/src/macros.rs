//! Declarative macros for writing validators.
//!
//! - [`validator!`]: struct, `Validate` impl and factory from one rule
//! - [`compose!`]: AND-chain of validators
//! - [`any_of!`]: OR-chain of validators
//!
//! ```rust
//! use sift_validator::validator;
//! use sift_validator::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::new("not_blank", "must not be blank") }
//!     fn not_blank();
//! }
//!
//! validator! {
//!     pub MaxChars { max: usize } for str;
//!     rule(self, input) { input.chars().count() <= self.max }
//!     error(self, input) { ValidationError::new("max_chars", "too long") }
//!     new(max: usize) { Self { max } }
//!     fn max_chars(max: usize);
//! }
//!
//! assert!(not_blank().is_valid("x"));
//! assert!(!max_chars(2).is_valid("xyz"));
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Declares a validator.
///
/// The rule is a `bool` block; `error` is only evaluated when it is `false`.
///
/// Unit validators derive `Debug, Clone, Copy, PartialEq, Eq, Hash` and get a
/// `const` factory. Validators with fields derive `Debug, Clone` plus whatever
/// `#[derive(..)]` is written above the name, and take their constructor from
/// the `new(..)` clause:
///
/// ```rust,ignore
/// validator! {
///     pub Alpha for str;
///     rule(input) { ALPHA.is_match(input) }
///     error(input) { ValidationError::new("alpha", "letters only") }
///     fn alpha();            // optional
/// }
///
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Length { min: usize, max: usize } for str;
///     rule(self, input) { ... }
///     error(self, input) { ... }
///     new(min: usize, max: usize) { Self { min, max } }
///     fn length(min: usize, max: usize);
/// }
///
/// validator! {
///     pub Matches { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ... }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: regex::Regex::new(pattern)? }) }
///     fn matches(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // Shared `Validate` impl.
    (@impl $name:ident for $input:ty;
        |$self_:ident, $inp:ident| $rule:block
        else |$einp:ident| $err:block
    ) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &Self::Input,
            ) -> ::core::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    return ::core::result::Result::Ok(());
                }
                let $einp = $inp;
                ::core::result::Result::Err($err)
            }
        }
    };

    // Unit validator with factory.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // Unit validator.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        $crate::validator!(@impl $name for $input; |self, $inp| $rule else |$einp| $err);
    };

    // Fields, fallible constructor and factory.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $fety:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::core::result::Result<Self, $ety> $new_body
        }

        $crate::validator!(@impl $name for $input; |$self_, $inp| $rule else |$einp| $err);

        $vis fn $factory($($farg: $faty),*) -> ::core::result::Result<$name, $fety> {
            $name::new($($farg),*)
        }
    };

    // Fields, constructor and factory.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name for $input; |$self_, $inp| $rule else |$einp| $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// CHAINING MACROS
// ============================================================================

/// AND-chains validators: `compose![a, b, c]` is `a.and(b).and(c)`.
///
/// Needs [`ValidateExt`](crate::foundation::ValidateExt) in scope.
#[macro_export]
macro_rules! compose {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $first$(.and($rest))*
    };
}

/// OR-chains validators: `any_of![a, b, c]` is `a.or(b).or(c)`.
///
/// Needs [`ValidateExt`](crate::foundation::ValidateExt) in scope.
#[macro_export]
macro_rules! any_of {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $first$(.or($rest))*
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidateExt, ValidationError};

    validator! {
        Vowel for str;
        rule(input) { matches!(input, "a" | "e" | "i" | "o" | "u") }
        error(input) { ValidationError::new("vowel", format!("'{input}' is not a vowel")) }
        fn vowel();
    }

    validator! {
        Digit for str;
        rule(input) { input.len() == 1 && input.bytes().all(|b| b.is_ascii_digit()) }
        error(input) { ValidationError::new("digit", "not a digit") }
    }

    validator! {
        #[derive(Copy, PartialEq, Eq)]
        Between { lo: u32, hi: u32 } for u32;
        rule(self, input) { (self.lo..=self.hi).contains(input) }
        error(self, input) {
            ValidationError::new("between", format!("{input} not in {}..={}", self.lo, self.hi))
        }
        new(lo: u32, hi: u32) { Self { lo, hi } }
        fn between(lo: u32, hi: u32);
    }

    validator! {
        Ordered { lo: u32, hi: u32 } for u32;
        rule(self, input) { *input >= self.lo && *input <= self.hi }
        error(self, input) { ValidationError::new("ordered", "out of range") }
        new(lo: u32, hi: u32) -> ValidationError {
            if lo > hi {
                return Err(ValidationError::new("bounds", "lo must not exceed hi"));
            }
            Ok(Self { lo, hi })
        }
        fn ordered(lo: u32, hi: u32) -> ValidationError;
    }

    #[test]
    fn unit_validators() {
        assert!(vowel().is_valid("e"));
        let err = Vowel.validate("x").unwrap_err();
        assert_eq!(err.message, "'x' is not a vowel");
        assert_eq!(Vowel, vowel());

        assert!(Digit.is_valid("7"));
        assert!(!Digit.is_valid("77"));
    }

    #[test]
    fn validators_with_fields() {
        let v = between(1, 10);
        assert_eq!(v, Between::new(1, 10));
        assert!(v.is_valid(&10));
        assert_eq!(v.validate(&11).unwrap_err().message, "11 not in 1..=10");
    }

    #[test]
    fn fallible_constructor() {
        assert!(ordered(1, 10).unwrap().is_valid(&5));
        assert_eq!(Ordered::new(10, 5).unwrap_err().code, "bounds");
    }

    #[test]
    fn chaining() {
        let single = compose![Vowel];
        assert!(single.is_valid("a"));

        let vowel_or_digit = any_of![Vowel, Digit];
        assert!(vowel_or_digit.is_valid("3"));
        assert!(!vowel_or_digit.is_valid("z"));

        let narrow = compose![between(0, 100), between(10, 20), between(15, 30)];
        assert!(narrow.is_valid(&17));
        assert!(!narrow.is_valid(&12));
    }
}
