pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{host::SysinfoProbe, prompt::StdinPrompt, vagrant::VagrantTool};
pub use crate::config::{models::ModelsConfig, DeployArgs};
pub use crate::core::engine::{DeployEngine, Outcome};
pub use crate::domain::model::DeployPlan;
pub use crate::utils::error::{DeployError, Result};
