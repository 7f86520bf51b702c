//! Timezone output formatter

use super::common::{new_table, render_csv, render_json, render_table, render_yaml};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::mixpanel::Timezone;

/// Render timezones in the specified format
pub fn render_timezones(
    timezones: &[Timezone],
    format: OutputFormat,
    no_header: bool,
) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let mut table = new_table(&["ID", "Name"], no_header);
            for tz in timezones {
                table.add_row(vec![tz.id.to_string(), tz.name.clone()]);
            }
            Ok(render_table(&table, timezones.len(), "timezones", no_header))
        }
        OutputFormat::Csv => {
            let rows = timezones
                .iter()
                .map(|tz| vec![tz.id.to_string(), tz.name.clone()])
                .collect();
            Ok(render_csv("id,name", rows, no_header))
        }
        OutputFormat::Json => render_json(timezones),
        OutputFormat::Yaml => render_yaml(timezones),
    }
}

/// Output timezones in the specified format
pub fn output_timezones(timezones: &[Timezone], format: OutputFormat, no_header: bool) -> Result<()> {
    println!("{}", render_timezones(timezones, format, no_header)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timezones() -> Vec<Timezone> {
        vec![
            Timezone::from((5, "UTC".to_string())),
            Timezone::from((12, "Europe/Berlin".to_string())),
        ]
    }

    #[test]
    fn test_render_table() {
        let out = render_timezones(&timezones(), OutputFormat::Table, false).unwrap();
        assert!(out.contains("Europe/Berlin"));
        assert!(out.contains("Total: 2 timezones"));
    }

    #[test]
    fn test_render_csv() {
        let out = render_timezones(&timezones(), OutputFormat::Csv, true).unwrap();
        assert_eq!(out, "5,UTC\n12,Europe/Berlin");
    }

    #[test]
    fn test_render_json() {
        let out = render_timezones(&timezones(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["id"], 5);
        assert_eq!(value[0]["name"], "UTC");
    }

    #[test]
    fn test_render_empty_table() {
        let out = render_timezones(&[], OutputFormat::Table, false).unwrap();
        assert!(out.contains("Total: 0 timezones"));
    }
}
