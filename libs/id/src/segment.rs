//! Declarative segment templates shared by every identifier kind.
//!
//! A kind is described as an ordered list of [`Segment`]s. Parsing walks the
//! template against the `/`-separated components of the input; formatting
//! substitutes values back into the same template.

use crate::error::{MalformedIdentifier, MalformedReason};

/// One component of a resource ID template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Fixed text such as `subscriptions` or `Microsoft.Web`.
    Literal(&'static str),
    /// A user-chosen value, captured verbatim.
    Value {
        /// Field name on the typed identifier.
        name: &'static str,
        /// Human-readable label.
        label: &'static str,
    },
}

impl Segment {
    #[must_use]
    pub const fn literal(text: &'static str) -> Self {
        Self::Literal(text)
    }

    #[must_use]
    pub const fn value(name: &'static str, label: &'static str) -> Self {
        Self::Value { name, label }
    }

    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value { .. })
    }
}

/// How fixed segments are compared. Values are never case-folded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Casing {
    /// Fixed segments must match the canonical casing exactly.
    #[default]
    Sensitive,
    /// Fixed segments are compared ignoring ASCII case.
    Insensitive,
}

impl Casing {
    fn matches(self, actual: &str, expected: &str) -> bool {
        match self {
            Self::Sensitive => actual == expected,
            Self::Insensitive => actual.eq_ignore_ascii_case(expected),
        }
    }
}

/// Values captured from a successful parse, in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    kind: &'static str,
    input: String,
    values: Vec<(Segment, String)>,
}

impl Parsed {
    /// Removes and returns the value captured for `name`.
    ///
    /// Fails with [`MalformedReason::UnknownField`] if nothing was captured
    /// under `name`; that is a defect in the kind definition, not in the input.
    pub fn take(&mut self, name: &str) -> Result<String, MalformedIdentifier> {
        let position = self
            .values
            .iter()
            .position(|(segment, _)| matches!(segment, Segment::Value { name: n, .. } if *n == name));

        match position {
            Some(index) => Ok(self.values.remove(index).1),
            None => Err(MalformedIdentifier::new(
                self.kind,
                &self.input,
                MalformedReason::UnknownField {
                    name: name.to_string(),
                },
            )),
        }
    }

    /// Returns `(label, value)` pairs in template order.
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values.iter().filter_map(|(segment, value)| match segment {
            Segment::Value { label, .. } => Some((*label, value.as_str())),
            Segment::Literal(_) => None,
        })
    }

    /// Returns the captured values in template order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.iter().map(|(_, value)| value.as_str())
    }
}

/// Matches `input` against `segments`.
pub fn parse_segments(
    kind: &'static str,
    segments: &[Segment],
    input: &str,
    casing: Casing,
) -> Result<Parsed, MalformedIdentifier> {
    let fail = |reason| MalformedIdentifier::new(kind, input, reason);

    if input.is_empty() {
        return Err(fail(MalformedReason::Empty));
    }

    let Some(rest) = input.strip_prefix('/') else {
        return Err(fail(MalformedReason::MissingLeadingSeparator));
    };

    let components: Vec<&str> = rest.split('/').collect();
    let mut values = Vec::with_capacity(segments.len());

    for (index, segment) in segments.iter().enumerate() {
        let component = components.get(index).copied().filter(|c| !c.is_empty());

        match (*segment, component) {
            (Segment::Literal(expected), None) => {
                return Err(fail(MalformedReason::MissingSegment { expected }));
            }
            (Segment::Literal(expected), Some(actual)) => {
                if !casing.matches(actual, expected) {
                    return Err(fail(MalformedReason::SegmentMismatch {
                        expected,
                        actual: actual.to_string(),
                    }));
                }
            }
            (Segment::Value { label, .. }, None) => {
                return Err(fail(MalformedReason::MissingValue { label }));
            }
            (Segment::Value { .. }, Some(value)) => {
                values.push((*segment, value.to_string()));
            }
        }
    }

    if components.len() > segments.len() {
        return Err(fail(MalformedReason::UnexpectedSegments {
            extra: components[segments.len()..].join("/"),
        }));
    }

    Ok(Parsed {
        kind,
        input: input.to_string(),
        values,
    })
}

/// Substitutes `values` into `segments`, in order.
///
/// Surplus values are ignored and missing ones render as empty components,
/// so callers must supply exactly one value per value segment.
pub(crate) fn format_segments<'a>(
    segments: &[Segment],
    values: impl IntoIterator<Item = &'a str>,
) -> String {
    let mut values = values.into_iter();
    let mut out = String::new();

    for segment in segments {
        out.push('/');
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Value { .. } => out.push_str(values.next().unwrap_or_default()),
        }
    }

    out
}
