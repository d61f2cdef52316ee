use crate::domain::model::CONFIG_MODEL_ENV;
use crate::domain::ports::Hypervisor;
use crate::utils::error::{DeployError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Drives the `vagrant` CLI. Each invocation carries the selected model in
/// the child environment so the Vagrantfile can size the machines.
#[derive(Debug, Clone)]
pub struct VagrantTool {
    model: String,
}

impl VagrantTool {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<()> {
        tracing::debug!("vagrant {}", args.join(" "));

        let status = Command::new("vagrant")
            .args(args)
            .env(CONFIG_MODEL_ENV, &self.model)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(DeployError::IoError)?;

        if !status.success() {
            return Err(DeployError::CommandFailedError {
                command: format!("vagrant {}", args.join(" ")),
                exit_code: status.code(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl Hypervisor for VagrantTool {
    async fn start_vm(&self, name: &str) -> Result<()> {
        self.run(&["up", name]).await
    }

    async fn run_script(&self, vm: &str, script: &str, as_root: bool) -> Result<()> {
        let remote_command = if as_root {
            format!("sudo bash {}", script)
        } else {
            format!("bash {}", script)
        };
        self.run(&["ssh", vm, "-c", &remote_command]).await
    }
}
