// Shared formatting utilities for CLI output

use comfy_table::{Cell, CellAlignment, Table};

/// Output format types supported across all commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text report (default)
    Plain,
    /// JSON rows for programmatic consumption
    Json,
    /// Human-readable table
    Table,
}

impl OutputFormat {
    /// Parse format from string
    #[allow(clippy::should_implement_trait)] // Infallible parsing with default, not FromStr semantics
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "table" => OutputFormat::Table,
            _ => OutputFormat::Plain,
        }
    }
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

/// Two decimals, as every score is printed
pub fn format_score(value: f64) -> String {
    format!("{value:.2}")
}

/// `12.50%`
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

/// Table with a header row; numeric columns after the first are right-aligned
pub fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(header.iter().map(|h| Cell::new(h)).collect::<Vec<_>>());
    for index in 1..header.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}
