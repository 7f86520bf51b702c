//! Project data models

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::config::clusters;
use crate::error::MixpanelError;
use crate::mixpanel::traits::MixpanelResource;

/// Data residency of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Us,
    Eu,
}

impl Domain {
    /// Derive the domain from the cluster hostname the API reports
    pub fn from_host(host: &str) -> Self {
        if host == clusters::EU_HOST {
            Domain::Eu
        } else {
            Domain::Us
        }
    }

    /// Cluster id used when creating a project in this domain
    pub fn cluster_id(self) -> i64 {
        match self {
            Domain::Us => clusters::US_CLUSTER_ID,
            Domain::Eu => clusters::EU_CLUSTER_ID,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Us => "US",
            Domain::Eu => "EU",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = MixpanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "US" => Ok(Domain::Us),
            "EU" => Ok(Domain::Eu),
            _ => Err(MixpanelError::Config(format!(
                "invalid domain '{}' (expected US or EU)",
                s
            ))),
        }
    }
}

/// Project metadata as returned by the API
#[derive(Deserialize, Debug, Clone)]
pub struct ProjectMetadata {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Cluster hostname, e.g. "eu.mixpanel.com"
    #[serde(default)]
    pub domain: String,
    #[serde(default, rename = "timezone_name")]
    pub timezone: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub secret: String,
}

/// Mixpanel project
#[derive(Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub domain: Domain,
    /// IANA timezone name
    pub timezone: String,
    pub api_key: String,
    pub token: String,
    pub secret: String,
}

impl From<ProjectMetadata> for Project {
    fn from(meta: ProjectMetadata) -> Self {
        Self {
            id: meta.id,
            domain: Domain::from_host(&meta.domain),
            name: meta.name,
            timezone: meta.timezone,
            api_key: meta.api_key,
            token: meta.token,
            secret: meta.secret,
        }
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("domain", &self.domain)
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}

impl MixpanelResource for Project {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Desired state of a project to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub domain: Domain,
    pub timezone: String,
}

impl NewProject {
    pub fn new(name: impl Into<String>, domain: Domain, timezone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain,
            timezone: timezone.into(),
        }
    }
}
