//! `use sift_validator::prelude::*;` for traits, errors, validators,
//! combinators and macros in one import.
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let v = compose![alphanumeric(), length(3, 20), lowercase()];
//! assert!(v.is_valid("sift"));
//! assert!(!v.is_valid("Sift"));
//! ```

pub use crate::combinators::{And, Not, Or, and, not, or};
pub use crate::foundation::{SelectorError, Validate, ValidateExt, ValidationError};
#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
pub use crate::{any_of, compose, validator};
