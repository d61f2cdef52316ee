use crate::utils::error::Result;
use async_trait::async_trait;

/// Driver for the virtualization tool that owns VM lifecycle.
#[async_trait]
pub trait Hypervisor: Send + Sync {
    async fn start_vm(&self, name: &str) -> Result<()>;

    /// Run a script over a remote shell session on a VM. `as_root` elevates
    /// with sudo, otherwise the tool's default remote user is used.
    async fn run_script(&self, vm: &str, script: &str, as_root: bool) -> Result<()>;
}

pub trait HostProbe: Send + Sync {
    fn available_memory_mb(&self) -> u64;
}

pub trait UserPrompt: Send + Sync {
    fn confirm(&self, question: &str) -> Result<bool>;
}
