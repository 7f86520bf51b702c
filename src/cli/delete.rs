//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a project (service accounts lack this permission)
    #[command(visible_alias = "project")]
    Prj(DeletePrjArgs),
}

/// Arguments for 'delete prj' subcommand
#[derive(Parser, Debug)]
pub struct DeletePrjArgs {
    /// Project ID
    pub id: i64,
}
