//! # azrm-id
//!
//! Typed resource IDs for the Azure Resource Manager provider.
//!
//! ## Design Principles
//!
//! - Each resource kind has its own ID type; kinds cannot be mixed up
//! - Canonical paths roundtrip exactly (format → parse → format)
//! - Fixed segments may be matched case-insensitively; values never are
//! - All kinds share one declarative segment matcher
//!
//! ## ID Format
//!
//! Resource IDs are hierarchical paths:
//!
//! `/subscriptions/{subscription}/resourceGroups/{group}/providers/{namespace}/{type}/{name}`
//!
//! Nested resources append further `{type}/{name}` pairs, for example:
//! - `/subscriptions/s/resourceGroups/rg/providers/Microsoft.PowerBIDedicated/capacities/cap1`
//! - `/subscriptions/s/resourceGroups/rg/providers/Microsoft.Network/networkWatchers/nw/flowLogs/log1`
//!
//! IDs returned by the management API are always canonically cased. IDs typed
//! by users (imports, cross-references) may not be, which is what
//! `parse_insensitively` is for.

mod error;
mod kinds;
mod macros;
mod segment;
mod system_data;
mod types;

pub use error::{ArityMismatch, MalformedIdentifier, MalformedReason, TimestampError};
pub use kinds::{IdKind, KINDS};
pub use segment::{parse_segments, Casing, Parsed, Segment};
pub use system_data::{IdentityType, SystemData};
pub use types::*;

/// Common interface of every typed resource ID.
pub trait ResourceId: Sized + std::fmt::Display + std::str::FromStr {
    /// Runtime descriptor for this kind.
    const KIND: IdKind;

    /// Formats the ID as its canonical path.
    fn id(&self) -> String;

    /// Parses an ID, requiring fixed segments in their canonical casing.
    fn parse(input: &str) -> Result<Self, MalformedIdentifier>;

    /// Parses an ID, ignoring the casing of fixed segments.
    fn parse_insensitively(input: &str) -> Result<Self, MalformedIdentifier>;
}
