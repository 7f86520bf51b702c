//! Common utilities for output formatters

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::error::Result;

/// Placeholder printed instead of a credential
const MASK: &str = "********";

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Hide a credential unless explicitly requested
pub fn mask_secret(value: &str, show: bool) -> String {
    if show || value.is_empty() {
        value.to_string()
    } else {
        MASK.to_string()
    }
}

/// Borderless table with an optional header row
pub(super) fn new_table(header: &[&str], no_header: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(header.to_vec());
    }
    table
}

/// Render a table followed by a "Total" footer (omitted with `no_header`)
pub(super) fn render_table(table: &Table, total: usize, noun: &str, no_header: bool) -> String {
    if no_header {
        format!("{table}")
    } else {
        format!("{table}\n\nTotal: {} {}", total, noun)
    }
}

/// Render CSV lines with an optional header line
pub(super) fn render_csv(header: &str, rows: Vec<Vec<String>>, no_header: bool) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if !no_header {
        lines.push(header.to_string());
    }
    lines.extend(rows.into_iter().map(|row| {
        row.iter()
            .map(|v| escape_csv(v))
            .collect::<Vec<_>>()
            .join(",")
    }));
    lines.join("\n")
}

pub(super) fn render_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

pub(super) fn render_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_yml::to_string(data)?)
}
