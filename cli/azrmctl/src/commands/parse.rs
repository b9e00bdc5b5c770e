//! Parse command.

use anyhow::Result;
use azrm_id::{Casing, IdKind, Parsed, KINDS};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_info, print_json, print_output, OutputFormat};

use super::CommandContext;

/// Parse a resource ID into its segments.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// The resource ID to parse.
    id: String,

    /// ID kind (see `azid kinds`). Every kind is tried when omitted.
    #[arg(long, short)]
    kind: Option<String>,

    /// Ignore the casing of fixed segments such as `resourceGroups`.
    #[arg(long, short)]
    insensitive: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct SegmentRow {
    segment: &'static str,
    value: String,
}

#[derive(Debug, Serialize)]
struct ParsedView {
    kind: &'static str,
    id: String,
    segments: Vec<SegmentRow>,
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let casing = if self.insensitive {
            Casing::Insensitive
        } else {
            Casing::Sensitive
        };

        let (kind, parsed) = match &self.kind {
            Some(name) => {
                let kind =
                    IdKind::by_name(name).ok_or_else(|| CliError::UnknownKind(name.clone()))?;
                let parsed = kind.parse(&self.id, casing).map_err(CliError::from)?;
                (kind, parsed)
            }
            None => detect(&self.id, casing)?,
        };

        let view = view(kind, &parsed)?;

        match ctx.format {
            OutputFormat::Json => print_json(&view),
            OutputFormat::Table => {
                print_info(&format!("{} {}", view.kind, view.id));
                print_output(&view.segments, ctx.format);
            }
        }

        Ok(())
    }
}

/// Finds the first kind whose template matches `input`.
fn detect(input: &str, casing: Casing) -> Result<(&'static IdKind, Parsed), CliError> {
    for kind in KINDS {
        match kind.parse(input, casing) {
            Ok(parsed) => {
                debug!(kind = kind.name(), "ID kind matched");
                return Ok((kind, parsed));
            }
            Err(e) => debug!(kind = kind.name(), reason = %e.reason, "ID kind did not match"),
        }
    }

    Err(CliError::NoMatchingKind(input.to_string()))
}

/// Builds the view, re-rendering the ID in canonical casing.
fn view(kind: &IdKind, parsed: &Parsed) -> Result<ParsedView, CliError> {
    let values: Vec<&str> = parsed.values().collect();
    let id = kind.format(&values)?;

    let segments = parsed
        .labelled()
        .map(|(segment, value)| SegmentRow {
            segment,
            value: value.to_string(),
        })
        .collect();

    Ok(ParsedView {
        kind: kind.display_name(),
        id,
        segments,
    })
}
