//! Timezone command handlers

use log::debug;

use crate::cli::{Cli, Command, GetResource, TzSortField};
use crate::error::MixpanelError;
use crate::mixpanel::traits::find_by_name;
use crate::mixpanel::MixpanelClient;
use crate::output::output_timezones;
use crate::ui::{create_spinner, finish_spinner};

use super::Timezone;

/// Run the 'get tz' command
///
/// With a NAME, prints the matching timezone or fails with
/// `TimezoneNotFound`; otherwise lists (optionally filtered) timezones.
pub async fn run_tz_command(
    client: &MixpanelClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Tz(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching timezones...", cli.batch);
    let result = client.list_timezones().await;
    finish_spinner(spinner);
    let mut timezones = result?;

    if let Some(name) = &args.name {
        let timezone = find_by_name(&timezones, name)
            .cloned()
            .ok_or_else(|| MixpanelError::TimezoneNotFound(name.clone()))?;

        if args.output.is_structured() {
            output_timezones(&[timezone], args.output, cli.no_header)?;
        } else {
            println!("{}", timezone.id);
        }
        return Ok(());
    }

    if let Some(filter) = &args.filter {
        let filter_lower = filter.to_lowercase();
        timezones.retain(|tz| tz.name.to_lowercase().contains(&filter_lower));
        debug!(
            "Filtered to {} timezones matching '{}'",
            timezones.len(),
            filter
        );
    }

    sort_timezones(&mut timezones, args.sort);
    output_timezones(&timezones, args.output, cli.no_header)?;
    Ok(())
}

fn sort_timezones(timezones: &mut [Timezone], field: TzSortField) {
    match field {
        TzSortField::None => {}
        TzSortField::Name => timezones.sort_by(|a, b| a.name.cmp(&b.name)),
        TzSortField::Id => timezones.sort_by_key(|tz| tz.id),
    }
}
