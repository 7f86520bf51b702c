//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use super::enums::TzSortField;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get organizations visible to the service account
    #[command(
        visible_alias = "orgs",
        visible_alias = "organization",
        visible_alias = "organizations"
    )]
    Org(OrgArgs),

    /// Get projects by ID
    #[command(
        visible_alias = "prjs",
        visible_alias = "project",
        visible_alias = "projects"
    )]
    Prj(PrjArgs),

    /// Get supported timezones
    #[command(visible_alias = "timezone", visible_alias = "timezones")]
    Tz(TzArgs),
}

/// Arguments for 'get org' subcommand
#[derive(Parser, Debug)]
pub struct OrgArgs {
    /// Organization name or ID (if specified, shows only that organization)
    pub name: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get prj' subcommand
#[derive(Parser, Debug)]
pub struct PrjArgs {
    /// Project IDs (fetched concurrently, bounded by --concurrency)
    #[arg(required = true)]
    pub ids: Vec<i64>,

    /// Show API key, token and secret instead of masking them
    #[arg(long, default_value_t = false)]
    pub show_secrets: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get tz' subcommand
#[derive(Parser, Debug)]
pub struct TzArgs {
    /// Timezone name (exact match); prints its ID or fails if unsupported
    pub name: Option<String>,

    /// Filter timezones by name (case-insensitive substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Sort results by field
    #[arg(short, long, value_enum, default_value_t = TzSortField::None)]
    pub sort: TzSortField,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
