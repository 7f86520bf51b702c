//! Organization command handlers

use log::debug;

use crate::cli::{Cli, Command, GetResource};
use crate::mixpanel::traits::MixpanelResource;
use crate::mixpanel::MixpanelClient;
use crate::output::output_organizations;
use crate::ui::{create_spinner, finish_spinner};

/// Run the 'get org' command
pub async fn run_org_command(
    client: &MixpanelClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Org(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching organizations...", cli.batch);
    let result = client.get_organizations().await;
    finish_spinner(spinner);

    let mut organizations = result?;
    organizations.sort_by_key(|org| org.id);

    if let Some(name) = &args.name {
        organizations.retain(|org| org.matches(name));
        if organizations.is_empty() {
            return Err(format!("Organization '{}' not found", name).into());
        }
    }

    debug!("Printing {} organizations", organizations.len());
    output_organizations(&organizations, args.output, cli.no_header)?;
    Ok(())
}
