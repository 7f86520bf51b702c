//! Update command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'update' command
#[derive(Subcommand, Debug)]
pub enum UpdateResource {
    /// Rename a project or change its timezone
    #[command(visible_alias = "project")]
    Prj(UpdatePrjArgs),
}

/// Arguments for 'update prj' subcommand
///
/// Only values that differ from the current project are sent.
#[derive(Parser, Debug)]
#[command(group(
    clap::ArgGroup::new("changes")
        .required(true)
        .multiple(true)
        .args(["name", "timezone"])
))]
pub struct UpdatePrjArgs {
    /// Project ID
    pub id: i64,

    /// New project name
    #[arg(long)]
    pub name: Option<String>,

    /// New timezone name (must be listed by 'get tz')
    #[arg(long)]
    pub timezone: Option<String>,
}
