//! Format command.

use anyhow::Result;
use azrm_id::IdKind;
use clap::Args;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_json, OutputFormat};

use super::CommandContext;

/// Build the canonical ID of a resource.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// ID kind (see `azid kinds`).
    kind: String,

    /// Resource group name, followed by each resource name in the path.
    #[arg(required = true)]
    values: Vec<String>,

    /// Subscription ID. Defaults to ARM_SUBSCRIPTION_ID, then the saved config.
    #[arg(long, short)]
    subscription: Option<String>,
}

impl FormatCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let kind =
            IdKind::by_name(&self.kind).ok_or_else(|| CliError::UnknownKind(self.kind.clone()))?;

        let subscription = match self.subscription {
            Some(subscription) => subscription,
            None => ctx
                .config()?
                .subscription_id
                .clone()
                .ok_or(CliError::NoSubscription)?,
        };

        let id = build_id(kind, &subscription, &self.values)?;
        debug!(kind = kind.name(), %id, "ID formatted");

        match ctx.format {
            OutputFormat::Json => print_json(&serde_json::json!({
                "kind": kind.display_name(),
                "id": id,
            })),
            OutputFormat::Table => println!("{}", id),
        }

        Ok(())
    }
}

fn build_id(kind: &IdKind, subscription: &str, values: &[String]) -> Result<String, CliError> {
    let all: Vec<&str> = std::iter::once(subscription)
        .chain(values.iter().map(String::as_str))
        .collect();

    for (label, value) in kind.value_labels().zip(&all) {
        if value.is_empty() {
            return Err(CliError::EmptyValue { label });
        }
    }

    Ok(kind.format(&all)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use azrm_id::{CapacityId, ExpressRouteAuthorizationId};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_build_capacity_id() {
        let id = build_id(&CapacityId::KIND, "sub", &strings(&["rg", "cap"])).unwrap();
        assert_eq!(id, CapacityId::new("sub", "rg", "cap").id());
    }

    #[test]
    fn test_build_nested_id() {
        let id = build_id(
            &ExpressRouteAuthorizationId::KIND,
            "sub",
            &strings(&["rg", "cloud", "auth"]),
        )
        .unwrap();
        assert_eq!(
            ExpressRouteAuthorizationId::parse(&id).unwrap(),
            ExpressRouteAuthorizationId::new("sub", "rg", "cloud", "auth")
        );
    }

    #[test]
    fn test_wrong_number_of_values() {
        let err = build_id(&CapacityId::KIND, "sub", &strings(&["rg"])).unwrap_err();
        assert!(matches!(err, CliError::Arity(_)));
    }

    #[test]
    fn test_empty_value_rejected() {
        let err = build_id(&CapacityId::KIND, "sub", &strings(&["rg", ""])).unwrap_err();
        assert!(matches!(
            err,
            CliError::EmptyValue {
                label: "Capacity Name"
            }
        ));

        let err = build_id(&CapacityId::KIND, "", &strings(&["rg", "cap"])).unwrap_err();
        assert!(matches!(err, CliError::EmptyValue { label: "Subscription" }));
    }
}
