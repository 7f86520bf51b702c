//! Project command handlers

use futures::future::join_all;
use log::{debug, info, warn};

use crate::cli::{Cli, Command, CreateResource, DeleteResource, GetResource, UpdateResource};
use crate::error::MixpanelError;
use crate::mixpanel::MixpanelClient;
use crate::output::{output_projects, ProjectOutputOptions};
use crate::ui::{
    confirm_project_creation, create_spinner, finish_spinner, finish_spinner_with_result,
    CreationSummary,
};

use super::models::{NewProject, Project};

/// Run the 'get prj' command
///
/// Projects are fetched concurrently; the client's gate bounds how many
/// requests are actually in flight.
pub async fn run_prj_command(
    client: &MixpanelClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Prj(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!("Fetching {} project(s)...", args.ids.len()),
        cli.batch,
    );

    let results = join_all(args.ids.iter().map(|&id| async move {
        client.get_project(id).await.map_err(|e| (id, e))
    }))
    .await;

    finish_spinner(spinner);

    let mut projects = Vec::with_capacity(results.len());
    let mut failed = 0;
    for result in results {
        match result {
            Ok(project) => projects.push(project),
            Err((id, e)) => {
                eprintln!("Error fetching project {}: {}", id, e);
                failed += 1;
            }
        }
    }

    if !projects.is_empty() {
        let options = ProjectOutputOptions {
            no_header: cli.no_header,
            show_secrets: args.show_secrets,
        };
        output_projects(&projects, args.output, &options)?;
    }

    if failed > 0 {
        return Err(format!("Failed to fetch {} of {} project(s)", failed, args.ids.len()).into());
    }
    Ok(())
}

/// Run the 'create prj' command
pub async fn run_create_prj_command(
    client: &MixpanelClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::Prj(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let new_project = NewProject::new(&args.name, args.domain, &args.timezone);
    let summary = CreationSummary::new(&new_project, client.host());
    if !confirm_project_creation(&summary, args.yes, cli.batch) {
        return Err("Project creation aborted".into());
    }

    let spinner = create_spinner(&format!("Creating project '{}'...", args.name), cli.batch);
    let result = client.create_project(&new_project).await;
    finish_spinner_with_result(spinner, &result, "Project created");
    let created = result?;

    let project = refresh_project(client, created).await;

    let options = ProjectOutputOptions {
        no_header: cli.no_header,
        show_secrets: args.show_secrets,
    };
    output_projects(&[project], args.output, &options)?;
    Ok(())
}

/// Re-read a freshly created project so output reflects server state
async fn refresh_project(client: &MixpanelClient, created: Project) -> Project {
    match client.get_project(created.id).await {
        Ok(project) => project,
        Err(e) => {
            warn!(
                "Could not re-read project {} after creation, showing requested values: {}",
                created.id, e
            );
            created
        }
    }
}

/// Changes that differ from the project's current state
#[derive(Debug, Default, PartialEq, Eq)]
struct ProjectChanges<'a> {
    name: Option<&'a str>,
    timezone: Option<&'a str>,
}

impl<'a> ProjectChanges<'a> {
    fn between(current: &Project, name: Option<&'a str>, timezone: Option<&'a str>) -> Self {
        Self {
            name: name.filter(|n| *n != current.name),
            timezone: timezone.filter(|tz| *tz != current.timezone),
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.timezone.is_none()
    }
}

/// Run the 'update prj' command
///
/// Reads the project first and only sends values that changed. A new
/// timezone is checked against the reference list before anything is sent.
pub async fn run_update_prj_command(
    client: &MixpanelClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Update {
        resource: UpdateResource::Prj(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let current = client.get_project(args.id).await?;
    let changes = ProjectChanges::between(&current, args.name.as_deref(), args.timezone.as_deref());

    if changes.is_empty() {
        println!("Project {} is already up to date", args.id);
        return Ok(());
    }

    if let Some(timezone) = changes.timezone {
        if !client.timezone_is_supported(timezone).await? {
            return Err(MixpanelError::TimezoneNotFound(timezone.to_string()).into());
        }
    }

    if let Some(name) = changes.name {
        client.update_project_name(args.id, name).await?;
        info!("Renamed project {} to '{}'", args.id, name);
    }

    if let Some(timezone) = changes.timezone {
        client.update_project_timezone(args.id, timezone).await?;
        info!("Changed timezone of project {} to '{}'", args.id, timezone);
    }

    debug!("Applied {:?} to project {}", changes, args.id);
    println!("Project {} updated", args.id);
    Ok(())
}

/// Run the 'delete prj' command
///
/// Service accounts lack permission to delete projects, so this never
/// touches the network.
pub fn run_delete_prj_command(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Delete {
        resource: DeleteResource::Prj(args),
    } = &cli.command
    else {
        unreachable!()
    };

    Err(MixpanelError::Unsupported(format!(
        "service accounts cannot delete projects; ask an organization admin to delete project {} in the Mixpanel UI",
        args.id
    ))
    .into())
}
