//! Organization data models

use serde::{Deserialize, Serialize};

use crate::mixpanel::traits::MixpanelResource;

/// Organization as listed by the "me" endpoint
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: i64,
    pub name: String,
}

impl MixpanelResource for Organization {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
