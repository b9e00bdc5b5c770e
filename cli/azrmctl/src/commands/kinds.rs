//! Kinds command.

use anyhow::Result;
use azrm_id::{IdKind, KINDS};
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct KindRow {
    kind: &'static str,
    name: &'static str,
    template: String,
}

impl From<&IdKind> for KindRow {
    fn from(kind: &IdKind) -> Self {
        Self {
            kind: kind.name(),
            name: kind.display_name(),
            template: kind.template(),
        }
    }
}

pub fn run(ctx: CommandContext) -> Result<()> {
    let rows: Vec<KindRow> = KINDS.iter().map(KindRow::from).collect();
    print_output(&rows, ctx.format);
    Ok(())
}
