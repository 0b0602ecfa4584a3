//! Length validators.
//!
//! [`Length`] counts chars, [`ByteLength`] counts UTF-8 bytes. Both bounds
//! are inclusive.

use crate::foundation::ValidationError;

crate::validator! {
    /// Char count within `min..=max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Length { min: usize, max: usize } for str;
    rule(self, input) {
        let len = input.chars().count();
        len >= self.min && len <= self.max
    }
    error(self, input) {
        ValidationError::new(
            "length",
            format!("Length must be between {} and {} characters", self.min, self.max),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", input.chars().count().to_string())
    }
    new(min: usize, max: usize) { Self { min, max } }
    fn length(min: usize, max: usize);
}

crate::validator! {
    /// UTF-8 byte count within `min..=max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ByteLength { min: usize, max: usize } for str;
    rule(self, input) { input.len() >= self.min && input.len() <= self.max }
    error(self, input) {
        ValidationError::new(
            "byte_length",
            format!("Byte length must be between {} and {}", self.min, self.max),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", input.len().to_string())
    }
    new(min: usize, max: usize) { Self { min, max } }
    fn byte_length(min: usize, max: usize);
}

impl ByteLength {
    /// Only a lower bound; any length from `min` up passes.
    #[must_use]
    pub fn at_least(min: usize) -> Self {
        Self::new(min, usize::MAX)
    }
}
