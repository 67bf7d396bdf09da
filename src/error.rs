//! Structured error types for the flow layout engine.
//!
//! Configuration validation is the only failure the algorithm itself can
//! produce. The remaining variants belong to the JSON boundary and to the
//! container host.

use std::fmt;

use thiserror::Error;

use crate::model::Edges;

/// Which gap a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// The unified error type returned by all public flowwrap API functions.
#[derive(Debug, Error)]
pub enum FlowError {
    /// `maxRows` was set to a negative value. Zero means unlimited.
    #[error("maxRows can't be negative (got {0})")]
    NegativeMaxRows(i32),

    /// A gap was negative, NaN or infinite.
    #[error("{axis} gap must be a finite, non-negative size (got {value})")]
    InvalidGap { axis: Axis, value: f64 },

    /// At least one padding edge was negative, NaN or infinite.
    #[error("padding edges must be finite and non-negative (got {0:?})")]
    InvalidPadding(Edges),

    /// A container was asked to lay out children before it was measured.
    #[error("container must be measured before it can be laid out")]
    NotMeasured,

    /// JSON input failed to parse as a valid layout request.
    #[error("Failed to parse layout request: {source}{}", hint_suffix(.hint))]
    ParseError {
        source: serde_json::Error,
        hint: String,
    },

    /// The layout response could not be serialized.
    #[error("Output error: {0}")]
    OutputError(String),
}

fn hint_suffix(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {hint}")
    }
}

impl From<serde_json::Error> for FlowError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the layout request schema. Check field names, types and that sizes are non-negative.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        FlowError::ParseError { source: e, hint }
    }
}
