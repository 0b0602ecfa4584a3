//! Boolean composition of validators.
//!
//! [`And`] stops at the first rejection, [`Or`] at the first acceptance, and
//! [`Not`] flips the verdict. Usually built through
//! [`ValidateExt`](crate::foundation::ValidateExt) or the
//! [`compose!`](crate::compose) and [`any_of!`](crate::any_of) macros.

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
