//! Traits and error types every validator is built on.
//!
//! ```rust
//! use sift_validator::foundation::{Validate, ValidationError};
//!
//! struct Palindrome;
//!
//! impl Validate for Palindrome {
//!     type Input = str;
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         if input.chars().eq(input.chars().rev()) {
//!             Ok(())
//!         } else {
//!             Err(ValidationError::new("palindrome", "Input reads differently backwards"))
//!         }
//!     }
//! }
//!
//! assert!(Palindrome.is_valid("level"));
//! assert!(!Palindrome.is_valid("sift"));
//! ```

pub mod error;
pub mod traits;

pub use error::{SelectorError, ValidationError};
pub use traits::{Validate, ValidateExt};
