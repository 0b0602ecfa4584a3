//! Email address validator.
//!
//! Syntax only. Nothing is resolved or delivered.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::fqdn::Fqdn;

static LOCAL_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*$").unwrap());

const MAX_LOCAL_PART: usize = 64;
const MAX_ADDRESS: usize = 254;

/// `local@domain` with a dot-atom local part and an [`Fqdn`] domain.
///
/// The local part is at most 64 bytes, the whole address at most 254.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Email;

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let Some((local, domain)) = input.rsplit_once('@') else {
            return Err(ValidationError::invalid_format("email address"));
        };

        if input.len() > MAX_ADDRESS || local.len() > MAX_LOCAL_PART {
            return Err(ValidationError::new("email_too_long", "Email address is too long")
                .with_param("max", MAX_ADDRESS.to_string()));
        }

        if !LOCAL_PART.is_match(local) {
            return Err(ValidationError::invalid_format("email address")
                .with_param("part", "local"));
        }

        Fqdn::new().validate(domain).map_err(|e| {
            ValidationError::invalid_format("email address")
                .with_param("part", "domain")
                .with_nested(vec![e])
        })
    }
}

#[must_use]
pub const fn email() -> Email {
    Email
}
