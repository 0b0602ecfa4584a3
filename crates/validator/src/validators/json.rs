//! JSON validator.
//!
//! Well-formedness comes from `serde_json`. By default the document must be
//! a JSON object, the way a config or API payload would be.

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

/// Default maximum nesting depth.
const DEFAULT_MAX_DEPTH: usize = 128;

/// Validates JSON text.
///
/// ```
/// use sift_validator::foundation::Validate;
/// use sift_validator::validators::json;
///
/// assert!(json().is_valid(r#"{"key": "v", "n": [1, 2]}"#));
/// assert!(!json().is_valid("[1, 2, 3]"));
/// assert!(json().allow_primitives().is_valid("[1, 2, 3]"));
/// assert!(!json().is_valid(r#"{"key": "v""#));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Json {
    allow_primitives: bool,
    max_depth: usize,
}

impl Default for Json {
    fn default() -> Self {
        Self {
            allow_primitives: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Json {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept any JSON value at the top level, not only objects.
    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_primitives(mut self) -> Self {
        self.allow_primitives = true;
        self
    }

    /// Set maximum nesting depth. A bare scalar has depth 0.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

fn depth(value: &Value) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(value, 0_usize)];

    while let Some((value, level)) = stack.pop() {
        match value {
            Value::Array(items) => stack.extend(items.iter().map(|child| (child, level + 1))),
            Value::Object(map) => stack.extend(map.values().map(|child| (child, level + 1))),
            _ => continue,
        }
        deepest = deepest.max(level + 1);
    }

    deepest
}

impl Validate for Json {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ValidationError::invalid_format("JSON document")
                .with_param("line", e.line().to_string())
                .with_param("column", e.column().to_string())
        })?;

        if !self.allow_primitives && !value.is_object() {
            return Err(ValidationError::new(
                "json_not_object",
                "JSON document must be an object",
            ));
        }

        let actual = depth(&value);
        if actual > self.max_depth {
            return Err(ValidationError::new(
                "json_too_deep",
                format!("JSON nesting exceeds {} levels", self.max_depth),
            )
            .with_param("max", self.max_depth.to_string())
            .with_param("actual", actual.to_string()));
        }

        Ok(())
    }
}

#[must_use]
pub fn json() -> Json {
    Json::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{ "key": "value" }"#, true)]
    #[case(r#"{}"#, true)]
    #[case(r#"{"a": {"b": [1, {"c": null}]}}"#, true)]
    #[case(r#"{ key: "value" }"#, false)]
    #[case(r#"{ 'key': 'value' }"#, false)]
    #[case(r#"["a", "b"]"#, false)]
    #[case("null", false)]
    #[case("42", false)]
    #[case("", false)]
    #[case("{", false)]
    fn objects_only(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(json().is_valid(input), expected, "{input}");
    }

    #[rstest]
    #[case("null")]
    #[case("42")]
    #[case(r#""str""#)]
    #[case("[1, 2, 3]")]
    #[case("true")]
    fn primitives_when_allowed(#[case] input: &str) {
        assert!(json().allow_primitives().is_valid(input));
    }

    #[test]
    fn depth_counts_containers() {
        assert_eq!(depth(&serde_json::json!(1)), 0);
        assert_eq!(depth(&serde_json::json!({})), 1);
        assert_eq!(depth(&serde_json::json!({"a": [1, [2]]})), 3);
    }

    #[test]
    fn max_depth_limit() {
        let v = json().max_depth(2);
        assert!(v.is_valid(r#"{"a": {"b": 1}}"#));
        let err = v.validate(r#"{"a": {"b": {"c": 1}}}"#).unwrap_err();
        assert_eq!(err.code, "json_too_deep");
        assert_eq!(err.param("actual"), Some("3"));
    }

    #[test]
    fn syntax_error_reports_position() {
        let err = json().validate("{\n  \"a\": }").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("line"), Some("2"));
    }
}
