//! mixpanelctl - Manage Mixpanel projects with a service account
//!
//! A client library and CLI for the Mixpanel app API.
//!
//! # Features
//!
//! - List organizations and supported timezones
//! - Read, create and update projects
//! - Bounded request concurrency with cancellation
//! - Retries with exponential backoff for transient failures
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! export MIXPANEL_SERVICE_ACCOUNT_USERNAME=sa.user
//! export MIXPANEL_SERVICE_ACCOUNT_SECRET=...
//!
//! # List organizations
//! mixpanelctl get org
//!
//! # Look up a timezone id
//! mixpanelctl get tz Europe/Berlin
//!
//! # Create a project in the EU
//! mixpanelctl create prj --name web --domain EU --timezone Europe/Berlin
//!
//! # Rename a project
//! mixpanelctl update prj 3141 --name web-analytics
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mixpanel;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, CreateResource, DeleteResource, GetResource, OutputFormat, UpdateResource};
pub use error::{MixpanelError, Result};
pub use mixpanel::{
    run_create_prj_command, run_delete_prj_command, run_org_command, run_prj_command,
    run_tz_command, run_update_prj_command, ClientOptions, CredentialsResolver, Domain,
    MixpanelClient, MixpanelResource, NewProject, Organization, Project, RetryPolicy,
    ServiceAccount, Timezone,
};
pub use output::{output_organizations, output_projects, output_timezones};
