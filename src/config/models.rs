use crate::domain::model::{ModelProfile, Role};
use crate::utils::error::{DeployError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use std::collections::HashMap;
use std::path::Path;

const MIN_MEMORY_MB: u64 = 512;

/// The models file: top-level keys are model names, values are per-role
/// sizing maps.
#[derive(Debug, Clone, Default)]
pub struct ModelsConfig {
    models: HashMap<String, ModelProfile>,
}

impl ModelsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DeployError::IoError)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let models: HashMap<String, ModelProfile> = serde_yaml::from_str(content)?;
        Ok(Self { models })
    }

    /// All configured model names, sorted for stable diagnostics.
    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.models.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Membership check for the requested model. Runs before any resource
    /// calculation; the error carries the valid options for the diagnostic.
    pub fn resolve(&self, name: &str) -> Result<&ModelProfile> {
        self.models
            .get(name)
            .ok_or_else(|| DeployError::UnknownModelError {
                model: name.to_string(),
                available: self.model_names(),
            })
    }
}

impl Validate for ModelsConfig {
    fn validate(&self) -> Result<()> {
        if self.models.is_empty() {
            return Err(DeployError::MissingConfigError {
                field: "models".to_string(),
            });
        }

        for (name, profile) in &self.models {
            for role in Role::ALL {
                let sizing = profile.sizing(role);
                let field = |attr: &str| format!("{}.{}.{}", name, role.prefix(), attr);
                validate_positive_number(&field("memory"), sizing.memory, MIN_MEMORY_MB)?;
                validate_positive_number(&field("cpus"), u64::from(sizing.cpus), 1)?;
            }
        }

        Ok(())
    }
}
