//! String content validators
//!
//! Substring, equality, membership and free-form regex checks.

use crate::foundation::ValidationError;

// ============================================================================
// CONTAINMENT / EQUALITY
// ============================================================================

crate::validator! {
    /// Input contains `needle` as a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { needle: String } for str;
    rule(self, input) { input.contains(self.needle.as_str()) }
    error(self, input) {
        ValidationError::new("contains", format!("Input must contain '{}'", self.needle))
            .with_param("needle", self.needle.clone())
    }
    new(needle: impl Into<String>) { Self { needle: needle.into() } }
    fn contains(needle: impl Into<String>);
}

crate::validator! {
    /// Input is exactly `expected`.
    #[derive(PartialEq, Eq, Hash)]
    pub Equals { expected: String } for str;
    rule(self, input) { input == self.expected }
    error(self, input) {
        ValidationError::new("equals", format!("Input must equal '{}'", self.expected))
            .with_param("expected", self.expected.clone())
    }
    new(expected: impl Into<String>) { Self { expected: expected.into() } }
    fn equals(expected: impl Into<String>);
}

crate::validator! {
    /// Input is one of `options`.
    #[derive(PartialEq, Eq)]
    pub IsIn { options: Vec<String> } for str;
    rule(self, input) { self.options.iter().any(|option| option == input) }
    error(self, input) {
        ValidationError::new("is_in", "Input is not one of the allowed values")
            .with_param("options", self.options.join(", "))
    }
    new(options: impl IntoIterator<Item = impl Into<String>>) {
        Self { options: options.into_iter().map(Into::into).collect() }
    }
    fn is_in(options: impl IntoIterator<Item = impl Into<String>>);
}

crate::validator! {
    /// The empty string.
    pub IsNull for str;
    rule(input) { input.is_empty() }
    error(input) { ValidationError::new("is_null", "Input must be empty") }
    fn is_null();
}

// ============================================================================
// REGEX
// ============================================================================

crate::validator! {
    /// Input matches a caller-supplied regular expression.
    ///
    /// The pattern is not anchored for you; write `^...$` for a full match.
    pub Matches { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new("matches", "Input does not match the pattern")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches(pattern: &str) -> regex::Error;
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_contains() {
        assert!(contains("foo").is_valid("foobar"));
        assert!(contains("").is_valid("anything"));
        assert!(!contains("foo").is_valid("bar"));
        assert_eq!(contains("x").validate("y").unwrap_err().param("needle"), Some("x"));
    }

    #[test]
    fn test_equals() {
        assert!(equals("abc").is_valid("abc"));
        assert!(!equals("abc").is_valid("Abc"));
    }

    #[test]
    fn test_is_in() {
        let v = is_in(["foo", "bar"]);
        assert!(v.is_valid("foo"));
        assert!(!v.is_valid("baz"));
        assert!(!is_in(Vec::<String>::new()).is_valid(""));
    }

    #[test]
    fn test_is_null() {
        assert!(is_null().is_valid(""));
        assert!(!is_null().is_valid(" "));
    }

    #[test]
    fn test_matches() {
        let v = matches(r"^\d{3}-\d{4}$").unwrap();
        assert!(v.is_valid("123-4567"));
        assert!(!v.is_valid("invalid"));
        assert!(matches("(unclosed").is_err());
    }
}
