//! Verdict output for a single check.

use std::fmt;
use std::process::ExitCode;

use serde::Serialize;
use sift_validator::foundation::ValidationError;

/// Outcome of one check, printed as text or as a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub check: String,
    pub input: String,
    pub valid: bool,
    pub code: Option<String>,
    pub message: Option<String>,
}

impl Report {
    pub fn new(
        check: impl Into<String>,
        input: impl Into<String>,
        result: &Result<(), ValidationError>,
    ) -> Self {
        let (code, message) = match result {
            Ok(()) => (None, None),
            Err(e) => (Some(e.code.to_string()), Some(e.message.to_string())),
        };

        Self {
            check: check.into(),
            input: input.into(),
            valid: result.is_ok(),
            code,
            message,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => {
                write!(f, "{}: invalid [{code}] {message}", self.check)
            }
            _ => write!(f, "{}: valid", self.check),
        }
    }
}
