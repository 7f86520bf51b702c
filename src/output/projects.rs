//! Project output formatter

use serde::Serialize;

use super::common::{mask_secret, new_table, render_csv, render_json, render_table, render_yaml};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::mixpanel::Project;

/// Project output options
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectOutputOptions {
    pub no_header: bool,
    /// Print API key, token and secret in clear text
    pub show_secrets: bool,
}

/// Serializable project for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableProject<'a> {
    id: i64,
    name: &'a str,
    domain: &'static str,
    timezone: &'a str,
    api_key: String,
    token: String,
    secret: String,
}

impl<'a> SerializableProject<'a> {
    fn new(project: &'a Project, show_secrets: bool) -> Self {
        Self {
            id: project.id,
            name: &project.name,
            domain: project.domain.as_str(),
            timezone: &project.timezone,
            api_key: mask_secret(&project.api_key, show_secrets),
            token: mask_secret(&project.token, show_secrets),
            secret: mask_secret(&project.secret, show_secrets),
        }
    }
}

fn project_row(project: &Project, show_secrets: bool) -> Vec<String> {
    vec![
        project.id.to_string(),
        project.name.clone(),
        project.domain.to_string(),
        project.timezone.clone(),
        mask_secret(&project.api_key, show_secrets),
        mask_secret(&project.token, show_secrets),
        mask_secret(&project.secret, show_secrets),
    ]
}

/// Render projects in the specified format
pub fn render_projects(
    projects: &[Project],
    format: OutputFormat,
    options: &ProjectOutputOptions,
) -> Result<String> {
    let show = options.show_secrets;
    match format {
        OutputFormat::Table => {
            let mut table = new_table(
                &["ID", "Name", "Domain", "Timezone", "API Key", "Token", "Secret"],
                options.no_header,
            );
            for project in projects {
                table.add_row(project_row(project, show));
            }
            Ok(render_table(
                &table,
                projects.len(),
                "projects",
                options.no_header,
            ))
        }
        OutputFormat::Csv => {
            let rows = projects.iter().map(|p| project_row(p, show)).collect();
            Ok(render_csv(
                "id,name,domain,timezone,api_key,token,secret",
                rows,
                options.no_header,
            ))
        }
        OutputFormat::Json => {
            let data: Vec<_> = projects
                .iter()
                .map(|p| SerializableProject::new(p, show))
                .collect();
            render_json(&data)
        }
        OutputFormat::Yaml => {
            let data: Vec<_> = projects
                .iter()
                .map(|p| SerializableProject::new(p, show))
                .collect();
            render_yaml(&data)
        }
    }
}

/// Output projects in the specified format
pub fn output_projects(
    projects: &[Project],
    format: OutputFormat,
    options: &ProjectOutputOptions,
) -> Result<()> {
    println!("{}", render_projects(projects, format, options)?);
    Ok(())
}
