//! Project API operations

use log::{debug, info, warn};

use crate::config::api;
use crate::error::Result;
use crate::mixpanel::decode::decode_results;
use crate::mixpanel::transport::ApiRequest;
use crate::mixpanel::MixpanelClient;

use super::models::{NewProject, Project, ProjectMetadata};

impl MixpanelClient {
    /// Get a single project by ID
    pub async fn get_project(&self, id: i64) -> Result<Project> {
        let path = format!("{}/{}/metadata", api::PROJECT_SETTINGS, id);
        debug!("Fetching project {} from: {}{}", id, self.host(), path);

        let body = self.send(ApiRequest::get(path)).await?;
        let metadata: ProjectMetadata = decode_results(&body, "project metadata")?;

        Ok(Project::from(metadata))
    }

    /// Create a project in the service account's organization.
    ///
    /// Runs as a fixed pipeline: resolve the timezone id, resolve the
    /// organization, POST the creation request, decode the new id. Any failed
    /// step aborts the pipeline. There is no compensation: if the POST
    /// succeeds but its response cannot be decoded, the project exists
    /// remotely while this call returns an error.
    pub async fn create_project(&self, new_project: &NewProject) -> Result<Project> {
        let cluster_id = new_project.domain.cluster_id();
        let timezone_id = self.resolve_timezone_id(&new_project.timezone).await?;
        let organization = self.get_default_organization().await?;

        let path = format!(
            "{}/{}/{}",
            api::ORGANIZATIONS,
            organization.id,
            api::CREATE_PROJECT
        );
        let body = serde_json::json!({
            "project_name": new_project.name,
            "cluster_id": cluster_id,
            "timezone_id": timezone_id,
        });

        debug!(
            "Creating project '{}' in organization {} (cluster {}, timezone {})",
            new_project.name, organization.id, cluster_id, timezone_id
        );

        let response = self.send(ApiRequest::post_json(path, body)).await?;
        let created: ProjectMetadata =
            decode_results(&response, "created project").inspect_err(|e| {
                warn!(
                    "Project '{}' may have been created in organization {} but the response \
                     could not be read: {}",
                    new_project.name, organization.id, e
                );
            })?;

        info!("Project created with ID: {}", created.id);

        Ok(Project {
            id: created.id,
            name: new_project.name.clone(),
            domain: new_project.domain,
            timezone: new_project.timezone.clone(),
            api_key: created.api_key,
            token: created.token,
            secret: created.secret,
        })
    }

    /// Rename a project
    pub async fn update_project_name(&self, id: i64, name: &str) -> Result<()> {
        debug!("Renaming project {} to '{}'", id, name);
        self.post_project_update(id, vec![("name", name.to_string())])
            .await
    }

    /// Change a project's timezone
    pub async fn update_project_timezone(&self, id: i64, timezone: &str) -> Result<()> {
        debug!("Changing timezone of project {} to '{}'", id, timezone);
        self.post_project_update(
            id,
            vec![
                ("timezone", timezone.to_string()),
                ("timezone_name", timezone.to_string()),
            ],
        )
        .await
    }

    /// POST to the legacy project update form; only the status is checked.
    ///
    /// The form sets absolute values, so a resend is harmless.
    async fn post_project_update(&self, id: i64, fields: Vec<(&'static str, String)>) -> Result<()> {
        let path = format!("{}/{}", api::PROJECT_UPDATE, id);
        let request = ApiRequest::post_form(path, fields)
            .with_referer()
            .idempotent();
        self.send(request).await?;
        Ok(())
    }
}
