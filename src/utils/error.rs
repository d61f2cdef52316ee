use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Unknown model: {model}")]
    UnknownModelError { model: String, available: Vec<String> },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Air-gapped registries configuration not found: {path}")]
    MissingAirGapConfigError { path: String },

    #[error("Deployment aborted: {reason}")]
    AbortedError { reason: String },

    #[error("Command failed: {command}")]
    CommandFailedError {
        command: String,
        exit_code: Option<i32>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    UserAbort,
    External,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DeployError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeployError::YamlError(_)
            | DeployError::UnknownModelError { .. }
            | DeployError::MissingConfigError { .. }
            | DeployError::InvalidConfigValueError { .. }
            | DeployError::MissingAirGapConfigError { .. } => ErrorCategory::Configuration,
            DeployError::AbortedError { .. } => ErrorCategory::UserAbort,
            DeployError::CommandFailedError { .. } => ErrorCategory::External,
            DeployError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DeployError::YamlError(_)
            | DeployError::UnknownModelError { .. }
            | DeployError::MissingConfigError { .. }
            | DeployError::InvalidConfigValueError { .. }
            | DeployError::MissingAirGapConfigError { .. }
            | DeployError::AbortedError { .. }
            | DeployError::IoError(_) => ErrorSeverity::High,
            DeployError::CommandFailedError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DeployError::UnknownModelError { model, available } => format!(
                "Model '{}' is not defined. Valid models: {}",
                model,
                available.join(", ")
            ),
            DeployError::MissingAirGapConfigError { path } => {
                format!("Air-gapped mode requested but '{}' was not found", path)
            }
            DeployError::CommandFailedError { command, exit_code } => match exit_code {
                Some(code) => format!("'{}' exited with status {}", command, code),
                None => format!("'{}' was terminated by a signal", command),
            },
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DeployError::IoError(_) => "Check file paths and permissions".to_string(),
            DeployError::YamlError(_) => {
                "Check the models file against the expected schema".to_string()
            }
            DeployError::UnknownModelError { available, .. } => format!(
                "Pick one of the configured models: {}",
                available.join(", ")
            ),
            DeployError::MissingConfigError { field } => {
                format!("Add '{}' to the models file", field)
            }
            DeployError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the models file", field)
            }
            DeployError::MissingAirGapConfigError { path } => format!(
                "Create {} with one registry mirror per line, then run the deployment again",
                path
            ),
            DeployError::AbortedError { .. } => {
                "Free up host memory, or re-run with --ignore-memory to skip the check".to_string()
            }
            DeployError::CommandFailedError { .. } => {
                "Inspect the vagrant output above, then re-run to resume the bring-up".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;
