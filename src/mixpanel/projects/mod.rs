//! Project module

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_prj_command, run_delete_prj_command, run_prj_command, run_update_prj_command,
};
pub use models::{Domain, NewProject, Project, ProjectMetadata};
