//! Mixpanel API client module
//!
//! Transport (auth, concurrency gate, retries), response decoding and the
//! organization, project and timezone operations built on top of them.

mod client;
pub mod credentials;
pub mod decode;
pub mod gate;
pub mod organizations;
pub mod projects;
pub mod retry;
pub mod timezones;
pub mod traits;
pub mod transport;

pub use client::{ClientOptions, MixpanelClient};
pub use credentials::{CredentialsResolver, ServiceAccount};
pub use gate::ConcurrencyGate;
pub use organizations::{run_org_command, Organization};
pub use projects::{
    run_create_prj_command, run_delete_prj_command, run_prj_command, run_update_prj_command,
    Domain, NewProject, Project,
};
pub use retry::RetryPolicy;
pub use timezones::{run_tz_command, Timezone};
pub use traits::MixpanelResource;
