//! Timezone API operations

use log::debug;

use crate::config::api;
use crate::error::{MixpanelError, Result};
use crate::mixpanel::decode::decode_tuple_rows;
use crate::mixpanel::traits::find_by_name;
use crate::mixpanel::transport::ApiRequest;
use crate::mixpanel::MixpanelClient;

use super::models::Timezone;

impl MixpanelClient {
    /// Get the timezone reference list (fetched fresh on every call)
    pub async fn list_timezones(&self) -> Result<Vec<Timezone>> {
        debug!("Fetching timezones from: {}{}", self.host(), api::TIMEZONES);

        let body = self.send(ApiRequest::get(api::TIMEZONES)).await?;
        let timezones: Vec<Timezone> = decode_tuple_rows(&body, "timezones")?
            .into_iter()
            .map(Timezone::from)
            .collect();

        debug!("Fetched {} timezones", timezones.len());
        Ok(timezones)
    }

    /// Resolve a timezone name (exact, case-sensitive) to its numeric id
    pub async fn resolve_timezone_id(&self, name: &str) -> Result<i64> {
        let timezones = self.list_timezones().await?;
        find_by_name(&timezones, name)
            .map(|tz| tz.id)
            .ok_or_else(|| MixpanelError::TimezoneNotFound(name.to_string()))
    }

    /// Whether the timezone name exists in the reference list
    pub async fn timezone_is_supported(&self, name: &str) -> Result<bool> {
        let timezones = self.list_timezones().await?;
        Ok(find_by_name(&timezones, name).is_some())
    }
}
