//! Runtime descriptors for identifier kinds.

use crate::error::{ArityMismatch, MalformedIdentifier};
use crate::segment::{format_segments, parse_segments, Casing, Parsed, Segment};
use crate::types::*;

/// Every kind this crate defines.
pub const KINDS: &[IdKind] = &[
    CapacityId::KIND,
    AppServiceEnvironmentId::KIND,
    NetworkWatcherId::KIND,
    FlowLogId::KIND,
    PrivateCloudId::KIND,
    PrivateCloudClusterId::KIND,
    ExpressRouteAuthorizationId::KIND,
];

/// A kind of resource ID chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdKind {
    name: &'static str,
    display_name: &'static str,
    segments: &'static [Segment],
}

impl IdKind {
    #[must_use]
    pub const fn new(
        name: &'static str,
        display_name: &'static str,
        segments: &'static [Segment],
    ) -> Self {
        Self {
            name,
            display_name,
            segments,
        }
    }

    /// Looks a kind up by its name, ignoring case.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static IdKind> {
        KINDS.iter().find(|kind| kind.name.eq_ignore_ascii_case(name))
    }

    /// Short kebab-case name, e.g. `flow-log`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    #[must_use]
    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Labels of the value segments, in order.
    pub fn value_labels(&self) -> impl Iterator<Item = &'static str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Value { label, .. } => Some(*label),
            Segment::Literal(_) => None,
        })
    }

    /// Number of values needed to format an ID of this kind.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_value()).count()
    }

    /// Renders the template with `{field_name}` placeholders.
    #[must_use]
    pub fn template(&self) -> String {
        let mut out = String::new();
        for segment in self.segments {
            out.push('/');
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Value { name, .. } => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
        }
        out
    }

    pub fn parse(&self, input: &str, casing: Casing) -> Result<Parsed, MalformedIdentifier> {
        parse_segments(self.display_name, self.segments, input, casing)
    }

    /// Formats an ID from values in template order.
    pub fn format(&self, values: &[&str]) -> Result<String, ArityMismatch> {
        let expected = self.value_count();
        if values.len() != expected {
            return Err(ArityMismatch {
                kind: self.display_name,
                expected,
                actual: values.len(),
            });
        }

        Ok(format_segments(self.segments, values.iter().copied()))
    }
}
