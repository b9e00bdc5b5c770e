//! Error handling and display for the CLI.

use azrm_id::{ArityMismatch, MalformedIdentifier};
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown ID kind '{0}'")]
    UnknownKind(String),

    #[error("{0:?} does not match any known ID kind")]
    NoMatchingKind(String),

    #[error("No subscription specified")]
    NoSubscription,

    #[error("{label} cannot be empty")]
    EmptyValue { label: &'static str },

    #[error(transparent)]
    Malformed(#[from] MalformedIdentifier),

    #[error(transparent)]
    Arity(#[from] ArityMismatch),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        if let Some(hint) = hint(cli_err) {
            eprintln!("\n{}", format!("Hint: {hint}").yellow());
        }
    }
}

fn hint(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::UnknownKind(_) | CliError::NoMatchingKind(_) => {
            Some("Run `azid kinds` to list the supported ID kinds.")
        }
        CliError::NoSubscription => Some(
            "Pass --subscription, set ARM_SUBSCRIPTION_ID, or run `azid config set-subscription`.",
        ),
        CliError::Malformed(e) if e.is_case_mismatch() => {
            Some("The ID differs only in casing; retry with --insensitive.")
        }
        CliError::Arity(_) => Some("Pass the resource group followed by each resource name."),
        _ => None,
    }
}
