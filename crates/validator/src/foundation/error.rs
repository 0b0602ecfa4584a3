//! Failure types.
//!
//! A [`ValidationError`] means the input broke a rule. A [`SelectorError`]
//! means the caller named a version that does not exist; it is raised before
//! any input is inspected and never stands in for a `false` verdict.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value, json};

type Text = Cow<'static, str>;

/// Why an input was rejected.
///
/// `code` is stable and machine-readable; `message` is English prose. `params`
/// keep insertion order. `nested` holds the errors this one wraps, such as
/// both branches of a failed `or` or the domain error inside an email check.
///
/// ```rust
/// use sift_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("isbn10_checksum", "ISBN-10 checksum mismatch")
///     .with_param("sum", "254");
///
/// assert_eq!(error.param("sum"), Some("254"));
/// assert_eq!(error.to_string(), "isbn10_checksum: ISBN-10 checksum mismatch [sum=254]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: Text,
    pub message: Text,
    pub params: Vec<(Text, Text)>,
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    pub fn new(code: impl Into<Text>, message: impl Into<Text>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// The input does not parse as `expected`. Code `invalid_format`, with
    /// `expected` repeated as a param.
    pub fn invalid_format(expected: impl Into<Text>) -> Self {
        let expected = expected.into();
        Self::new("invalid_format", format!("Input is not a valid {expected}"))
            .with_param("expected", expected)
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<Text>, value: impl Into<Text>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_nested(mut self, errors: Vec<Self>) -> Self {
        self.nested = errors;
        self
    }

    /// First value stored under `key`.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find_map(|(k, v)| (k == key).then_some(&**v))
    }

    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// This error followed by every nested error, pre-order.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(error) = stack.pop() {
            out.push(error);
            stack.extend(error.nested.iter().rev());
        }
        out
    }

    /// `{ code, message, params: {k: v}, nested: [...] }`.
    pub fn to_json_value(&self) -> Value {
        let params: Map<String, Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        let nested: Vec<Value> = self.nested.iter().map(Self::to_json_value).collect();

        json!({
            "code": self.code,
            "message": self.message,
            "params": params,
            "nested": nested,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if let Some(((k, v), rest)) = self.params.split_first() {
            write!(f, " [{k}={v}")?;
            for (k, v) in rest {
                write!(f, ", {k}={v}")?;
            }
            f.write_str("]")?;
        }

        if !self.nested.is_empty() {
            f.write_str(" (")?;
            for (i, inner) in self.nested.iter().enumerate() {
                if i > 0 {
                    f.write_str("; ")?;
                }
                write!(f, "{inner}")?;
            }
            f.write_str(")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// A version selector outside its variant set.
///
/// ```rust
/// use sift_validator::foundation::SelectorError;
/// use sift_validator::validators::IsbnVersion;
///
/// let err = IsbnVersion::try_from(12_u8).unwrap_err();
/// assert_eq!(
///     err,
///     SelectorError::UnsupportedVersion { operation: "is_isbn", value: "12".into() }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("{operation}: unsupported version selector `{value}`")]
    UnsupportedVersion { operation: &'static str, value: String },
}

impl SelectorError {
    pub(crate) fn unsupported(operation: &'static str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        tracing::debug!(operation, %value, "rejected version selector");
        Self::UnsupportedVersion { operation, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn or_tree() -> ValidationError {
        ValidationError::new("or_failed", "none").with_nested(vec![
            ValidationError::new("a", "A").with_nested(vec![ValidationError::new("a1", "A1")]),
            ValidationError::new("b", "B"),
        ])
    }

    #[test]
    fn params_keep_order_and_first_wins() {
        let error = ValidationError::new("url_port", "bad port")
            .with_param("port", "0")
            .with_param("max", "65535")
            .with_param("port", "1");

        assert_eq!(error.param("port"), Some("0"));
        assert_eq!(error.param("min"), None);
        assert_eq!(error.params[1].0, "max");
    }

    #[test]
    fn flatten_is_preorder() {
        let tree = or_tree();
        let codes: Vec<_> = tree.flatten().into_iter().map(|e| &*e.code).collect();
        assert_eq!(codes, ["or_failed", "a", "a1", "b"]);
    }

    #[test]
    fn display_is_one_line() {
        let error = ValidationError::invalid_format("uuid")
            .with_nested(vec![ValidationError::new("inner", "Inner")]);
        assert_eq!(
            error.to_string(),
            "invalid_format: Input is not a valid uuid [expected=uuid] (inner: Inner)"
        );
        assert_eq!(or_tree().to_string(), "or_failed: none (a: A (a1: A1); b: B)");
    }

    #[test]
    fn json_shape() {
        let value = ValidationError::invalid_format("date")
            .with_nested(vec![ValidationError::new("x", "X")])
            .to_json_value();

        assert_eq!(
            value,
            json!({
                "code": "invalid_format",
                "message": "Input is not a valid date",
                "params": { "expected": "date" },
                "nested": [{ "code": "x", "message": "X", "params": {}, "nested": [] }],
            })
        );
    }

    #[test]
    fn static_text_is_borrowed() {
        let error = ValidationError::new("code", "message");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn selector_display() {
        assert_eq!(
            SelectorError::unsupported("is_uuid", 7).to_string(),
            "is_uuid: unsupported version selector `7`"
        );
    }
}
