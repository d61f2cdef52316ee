pub mod engine;
pub mod resources;

pub use crate::domain::model::{DeployPlan, ModelProfile, ResourceSummary, Role};
pub use crate::domain::ports::{HostProbe, Hypervisor, UserPrompt};
pub use crate::utils::error::Result;
