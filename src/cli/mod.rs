//! CLI argument parsing

mod common;
mod create;
mod delete;
mod enums;
mod get;
mod update;

use clap::{Parser, Subcommand};

use crate::config::{defaults, retry};

pub use common::OutputFormat;
pub use create::{CreatePrjArgs, CreateResource};
pub use delete::{DeletePrjArgs, DeleteResource};
pub use enums::TzSortField;
pub use get::{GetResource, OrgArgs, PrjArgs, TzArgs};
pub use update::{UpdatePrjArgs, UpdateResource};

/// Mixpanel service account CLI
#[derive(Parser, Debug)]
#[command(name = "mixpanelctl")]
#[command(version)]
#[command(about = "Manage Mixpanel projects with a service account", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Service account username (overrides MIXPANEL_SERVICE_ACCOUNT_USERNAME)
    #[arg(short = 'u', long, global = true)]
    pub username: Option<String>,

    /// Service account secret (overrides MIXPANEL_SERVICE_ACCOUNT_SECRET)
    #[arg(long, global = true)]
    pub secret: Option<String>,

    /// Mixpanel host URL
    #[arg(short = 'H', long, global = true, env = "MIXPANEL_HOST", default_value = defaults::HOST)]
    pub host: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Maximum requests in flight at once (0 = unlimited)
    #[arg(long, global = true, default_value_t = defaults::CONCURRENT_REQUESTS)]
    pub concurrency: usize,

    /// Retries for network errors and 5xx responses (0 disables retrying)
    #[arg(long, global = true, default_value_t = retry::MAX_RETRIES)]
    pub max_retries: u32,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit table/CSV headers
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Update resources
    Update {
        #[command(subcommand)]
        resource: UpdateResource,
    },

    /// Delete resources (not supported for service accounts)
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixpanel::Domain;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["mixpanelctl", "get", "org"]);
        assert_eq!(cli.host, defaults::HOST);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.concurrency, defaults::CONCURRENT_REQUESTS);
        assert_eq!(cli.max_retries, retry::MAX_RETRIES);
        assert!(!cli.batch);
        assert!(!cli.no_header);
        assert!(cli.username.is_none());
        assert!(cli.secret.is_none());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "mixpanelctl",
            "get",
            "tz",
            "-u",
            "sa.user",
            "--secret",
            "s3cret",
            "--concurrency",
            "1",
            "--max-retries",
            "0",
            "-b",
        ]);
        assert_eq!(cli.username.as_deref(), Some("sa.user"));
        assert_eq!(cli.secret.as_deref(), Some("s3cret"));
        assert_eq!(cli.concurrency, 1);
        assert_eq!(cli.max_retries, 0);
        assert!(cli.batch);
    }

    #[test]
    fn test_cli_get_projects() {
        let cli = Cli::parse_from(["mixpanelctl", "get", "prj", "1", "2", "-o", "json"]);
        let Command::Get {
            resource: GetResource::Prj(args),
        } = cli.command
        else {
            panic!("Expected get prj");
        };
        assert_eq!(args.ids, vec![1, 2]);
        assert_eq!(args.output, OutputFormat::Json);
        assert!(!args.show_secrets);
    }

    #[test]
    fn test_cli_get_project_requires_id() {
        assert!(Cli::try_parse_from(["mixpanelctl", "get", "prj"]).is_err());
    }

    #[test]
    fn test_cli_create_project() {
        let cli = Cli::parse_from([
            "mixpanelctl",
            "create",
            "prj",
            "--name",
            "web",
            "--domain",
            "eu",
            "--timezone",
            "Europe/Berlin",
            "-y",
        ]);
        let Command::Create {
            resource: CreateResource::Prj(args),
        } = cli.command
        else {
            panic!("Expected create prj");
        };
        assert_eq!(args.name, "web");
        assert_eq!(args.domain, Domain::Eu);
        assert_eq!(args.timezone, "Europe/Berlin");
        assert!(args.yes);
    }

    #[test]
    fn test_cli_create_project_invalid_domain() {
        let result = Cli::try_parse_from([
            "mixpanelctl",
            "create",
            "prj",
            "--name",
            "web",
            "--domain",
            "apac",
            "--timezone",
            "UTC",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_update_project() {
        let cli = Cli::parse_from(["mixpanelctl", "update", "prj", "42", "--timezone", "UTC"]);
        let Command::Update {
            resource: UpdateResource::Prj(args),
        } = cli.command
        else {
            panic!("Expected update prj");
        };
        assert_eq!(args.id, 42);
        assert!(args.name.is_none());
        assert_eq!(args.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    fn test_cli_update_project_needs_a_change() {
        assert!(Cli::try_parse_from(["mixpanelctl", "update", "prj", "42"]).is_err());
    }

    #[test]
    fn test_cli_delete_project() {
        let cli = Cli::parse_from(["mixpanelctl", "delete", "project", "42"]);
        assert!(matches!(
            cli.command,
            Command::Delete {
                resource: DeleteResource::Prj(DeletePrjArgs { id: 42 })
            }
        ));
    }
}
