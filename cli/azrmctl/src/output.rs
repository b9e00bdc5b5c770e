//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Print rows as a table, or as a JSON array.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => print_json(&data),
    }
}

/// Print a single value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "Info:".blue().bold(), message);
}
