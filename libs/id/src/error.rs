//! Error types for resource ID parsing and formatting.

use thiserror::Error;

/// A resource ID string that does not match the template of its kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("parsing {input:?} as a {kind} ID: {reason}")]
pub struct MalformedIdentifier {
    /// Display name of the kind that was being parsed.
    pub kind: &'static str,
    /// The input exactly as it was supplied.
    pub input: String,
    /// Why the input was rejected.
    pub reason: MalformedReason,
}

/// The cause of a [`MalformedIdentifier`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The input string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The input does not start with `/`.
    #[error("ID must start with '/'")]
    MissingLeadingSeparator,

    /// A fixed segment is absent.
    #[error("missing segment '{expected}'")]
    MissingSegment { expected: &'static str },

    /// A fixed segment is present but spelled differently.
    #[error("expected segment '{expected}', got '{actual}'")]
    SegmentMismatch {
        expected: &'static str,
        actual: String,
    },

    /// A value segment is absent or empty.
    #[error("missing value for {label}")]
    MissingValue { label: &'static str },

    /// A kind asked for a value its own template does not capture.
    #[error("no value captured for field '{name}'")]
    UnknownField { name: String },

    /// Components remain after the template has been fully matched.
    #[error("unexpected trailing segments '{extra}'")]
    UnexpectedSegments { extra: String },
}

impl MalformedIdentifier {
    pub(crate) fn new(kind: &'static str, input: &str, reason: MalformedReason) -> Self {
        Self {
            kind,
            input: input.to_string(),
            reason,
        }
    }

    /// Returns true if the input was empty.
    pub fn is_empty_input(&self) -> bool {
        matches!(self.reason, MalformedReason::Empty)
    }

    /// Returns true if a fixed segment matched only when ignoring case.
    pub fn is_case_mismatch(&self) -> bool {
        match &self.reason {
            MalformedReason::SegmentMismatch { expected, actual } => {
                expected.eq_ignore_ascii_case(actual)
            }
            _ => false,
        }
    }
}

/// Formatting a runtime-selected kind with the wrong number of values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("a {kind} ID takes {expected} values, got {actual}")]
pub struct ArityMismatch {
    pub kind: &'static str,
    pub expected: usize,
    pub actual: usize,
}

/// A `systemData` timestamp that is not valid RFC 3339.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("parsing {field} timestamp {value:?}: {source}")]
pub struct TimestampError {
    pub field: &'static str,
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}
