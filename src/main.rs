//! mixpanelctl - Main entry point

use clap::Parser;
use log::{debug, info};
use std::time::Duration;

use mixpanelctl::config::defaults;
use mixpanelctl::{
    run_create_prj_command, run_delete_prj_command, run_org_command, run_prj_command,
    run_tz_command, run_update_prj_command, Cli, ClientOptions, Command, CredentialsResolver,
    GetResource, MixpanelClient, RetryPolicy,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting mixpanelctl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Deletion is refused locally; no credentials needed
    if let Command::Delete { .. } = &cli.command {
        return run_delete_prj_command(cli);
    }

    let account = CredentialsResolver::new().resolve(cli.username.as_deref(), cli.secret.as_deref())?;

    let client = MixpanelClient::with_options(
        &account,
        ClientOptions {
            host: cli.host.clone(),
            concurrent_requests: cli.concurrency,
            retry: RetryPolicy::default().with_max_retries(cli.max_retries),
            timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
        },
    )?;

    let retry = client.retry_policy();
    debug!(
        "Host: {}, concurrency: {}, max retries: {}, base delay: {:?}",
        client.host(),
        client.gate().capacity(),
        retry.max_retries,
        retry.base_delay
    );

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Org(_) => run_org_command(&client, cli).await,
            GetResource::Prj(_) => run_prj_command(&client, cli).await,
            GetResource::Tz(_) => run_tz_command(&client, cli).await,
        },
        Command::Create { .. } => run_create_prj_command(&client, cli).await,
        Command::Update { .. } => run_update_prj_command(&client, cli).await,
        Command::Delete { .. } => run_delete_prj_command(cli),
    }
}
