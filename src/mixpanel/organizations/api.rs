//! Organization API operations

use log::debug;

use crate::config::api;
use crate::error::{MixpanelError, Result};
use crate::mixpanel::decode::decode_map_values;
use crate::mixpanel::transport::ApiRequest;
use crate::mixpanel::MixpanelClient;

use super::models::Organization;

impl MixpanelClient {
    /// Get all organizations the service account belongs to.
    ///
    /// The API returns them as a map keyed by id; the order of the returned
    /// list carries no meaning.
    pub async fn get_organizations(&self) -> Result<Vec<Organization>> {
        let path = format!("{}?{}", api::ME, api::ME_QUERY);
        debug!("Fetching organizations from: {}{}", self.host(), path);

        let body = self.send(ApiRequest::get(path)).await?;
        let organizations: Vec<Organization> = decode_map_values(&body, "organizations")?;

        debug!("Found {} organizations", organizations.len());
        Ok(organizations)
    }

    /// The organization new projects are created in.
    ///
    /// Only one organization per service account is supported; when the
    /// account sees several, the first one returned is used.
    pub async fn get_default_organization(&self) -> Result<Organization> {
        let organizations = self.get_organizations().await?;
        if organizations.len() > 1 {
            debug!(
                "Service account sees {} organizations, using the first one",
                organizations.len()
            );
        }
        organizations
            .into_iter()
            .next()
            .ok_or(MixpanelError::NoOrganization)
    }
}
