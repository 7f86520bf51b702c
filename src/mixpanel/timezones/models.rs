//! Timezone data models

use serde::Serialize;

use crate::mixpanel::traits::MixpanelResource;

/// Timezone from the reference list
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Timezone {
    pub id: i64,
    pub name: String,
}

impl From<(i64, String)> for Timezone {
    fn from((id, name): (i64, String)) -> Self {
        Self { id, name }
    }
}

impl MixpanelResource for Timezone {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
