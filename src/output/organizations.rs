//! Organization output formatter

use serde::Serialize;

use super::common::{new_table, render_csv, render_json, render_table, render_yaml};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::mixpanel::{MixpanelResource, Organization};

/// Serializable organization for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableOrganization<'a> {
    id: i64,
    name: &'a str,
}

impl<'a> From<&'a Organization> for SerializableOrganization<'a> {
    fn from(org: &'a Organization) -> Self {
        Self {
            id: org.id(),
            name: org.name(),
        }
    }
}

/// Render organizations in the specified format
pub fn render_organizations(
    orgs: &[Organization],
    format: OutputFormat,
    no_header: bool,
) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let mut table = new_table(&["ID", "Name"], no_header);
            for org in orgs {
                table.add_row(vec![org.id().to_string(), org.name().to_string()]);
            }
            Ok(render_table(&table, orgs.len(), "organizations", no_header))
        }
        OutputFormat::Csv => {
            let rows = orgs
                .iter()
                .map(|org| vec![org.id().to_string(), org.name().to_string()])
                .collect();
            Ok(render_csv("id,name", rows, no_header))
        }
        OutputFormat::Json => {
            let data: Vec<SerializableOrganization> = orgs.iter().map(Into::into).collect();
            render_json(&data)
        }
        OutputFormat::Yaml => {
            let data: Vec<SerializableOrganization> = orgs.iter().map(Into::into).collect();
            render_yaml(&data)
        }
    }
}

/// Output organizations in the specified format
pub fn output_organizations(
    orgs: &[Organization],
    format: OutputFormat,
    no_header: bool,
) -> Result<()> {
    println!("{}", render_organizations(orgs, format, no_header)?);
    Ok(())
}
