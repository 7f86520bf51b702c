//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use crate::mixpanel::Domain;

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create a project in the service account's organization
    #[command(visible_alias = "project")]
    Prj(CreatePrjArgs),
}

/// Arguments for 'create prj' subcommand
#[derive(Parser, Debug)]
pub struct CreatePrjArgs {
    /// Project name
    #[arg(long)]
    pub name: String,

    /// Data residency (US or EU)
    #[arg(long)]
    pub domain: Domain,

    /// Timezone name, e.g. "Europe/Berlin" (see 'get tz')
    #[arg(long)]
    pub timezone: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,

    /// Show API key, token and secret of the new project
    #[arg(long, default_value_t = false)]
    pub show_secrets: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
