//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML.
//! Each resource has a `render_*` function producing the text and an
//! `output_*` wrapper printing it to stdout.

mod common;
mod organizations;
mod projects;
mod timezones;

pub use common::{escape_csv, mask_secret};
pub use organizations::{output_organizations, render_organizations};
pub use projects::{output_projects, render_projects, ProjectOutputOptions};
pub use timezones::{output_timezones, render_timezones};
