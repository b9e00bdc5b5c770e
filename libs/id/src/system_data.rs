//! The `systemData` block the management API attaches to tracked resources.

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::TimestampError;

/// The kind of identity that created or last modified a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityType {
    Application,
    Key,
    ManagedIdentity,
    User,
}

/// Creation and modification metadata for a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_type: Option<IdentityType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by_type: Option<IdentityType>,
}

impl SystemData {
    /// Parses `createdAt`, if present.
    pub fn created_at_time(&self) -> Result<Option<DateTime<FixedOffset>>, TimestampError> {
        parse_timestamp("createdAt", self.created_at.as_deref())
    }

    pub fn set_created_at_time<Tz: TimeZone>(&mut self, time: DateTime<Tz>) {
        self.created_at = Some(format_timestamp(time));
    }

    /// Parses `lastModifiedAt`, if present.
    pub fn last_modified_at_time(&self) -> Result<Option<DateTime<FixedOffset>>, TimestampError> {
        parse_timestamp("lastModifiedAt", self.last_modified_at.as_deref())
    }

    pub fn set_last_modified_at_time<Tz: TimeZone>(&mut self, time: DateTime<Tz>) {
        self.last_modified_at = Some(format_timestamp(time));
    }
}

fn parse_timestamp(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<FixedOffset>>, TimestampError> {
    value
        .map(|v| {
            DateTime::parse_from_rfc3339(v).map_err(|source| TimestampError {
                field,
                value: v.to_string(),
                source,
            })
        })
        .transpose()
}

fn format_timestamp<Tz: TimeZone>(time: DateTime<Tz>) -> String {
    time.fixed_offset().to_rfc3339_opts(SecondsFormat::Secs, true)
}
