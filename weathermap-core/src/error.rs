//! Typed errors for the library surface.

use std::fmt;
use thiserror::Error;

/// JSON kind a field was expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedKind {
    Object,
    Array,
    Integer,
    Number,
    String,
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExpectedKind::Object => "object",
            ExpectedKind::Array => "array",
            ExpectedKind::Integer => "integer",
            ExpectedKind::Number => "number",
            ExpectedKind::String => "string",
        };
        f.write_str(s)
    }
}

/// Structural failure while decoding a One Call payload.
///
/// Paths are dotted with bracketed indices, e.g. `daily[2].temp.eve`.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Payload is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field '{path}'")]
    MissingField { path: String },

    #[error("Field '{path}' has the wrong type, expected {expected}")]
    TypeMismatch { path: String, expected: ExpectedKind },

    #[error("Field '{path}' must contain at least one condition")]
    EmptyConditions { path: String },

    #[error("Field '{path}' has unrecognized condition category '{value}'")]
    UnrecognizedCategory { path: String, value: String },
}

impl DecodeError {
    /// Field path the error refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::Json(_) => None,
            DecodeError::MissingField { path }
            | DecodeError::TypeMismatch { path, .. }
            | DecodeError::EmptyConditions { path }
            | DecodeError::UnrecognizedCategory { path, .. } => Some(path),
        }
    }
}

/// A decoded value outside its plausible range.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Field '{path}' value {value} is outside [{min}, {max}]")]
pub struct ValidationError {
    pub path: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}
