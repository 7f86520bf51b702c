//! Timezone module

mod api;
mod commands;
mod models;

pub use commands::run_tz_command;
pub use models::Timezone;
