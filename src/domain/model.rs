use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Constants
pub const VM_NAME_PREFIX: &str = "caasp";
pub const CONFIG_MODEL_ENV: &str = "CAASP_CONFIG_MODEL";
pub const AIRGAP_REGISTRIES_CONF: &str = "air-gap.d/air-gapped-registries.conf";
pub const AIRGAP_PREP_SCRIPT: &str = "/vagrant/deploy/100.prep_airgap.sh";
pub const RUN_ALL_SCRIPT: &str = "/vagrant/deploy/99.run-all.sh";

/// Cluster node roles, in bring-up order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Master,
    Worker,
    LoadBalancer,
    Storage,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Master, Role::Worker, Role::LoadBalancer, Role::Storage];

    /// Short name used in VM names and config field paths.
    pub fn prefix(&self) -> &'static str {
        match self {
            Role::Master => "master",
            Role::Worker => "worker",
            Role::LoadBalancer => "lb",
            Role::Storage => "storage",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Master => "master",
            Role::Worker => "worker",
            Role::LoadBalancer => "load balancer",
            Role::Storage => "storage",
        }
    }
}

pub fn vm_name(role: Role, index: u32) -> String {
    format!("{}-{}-{}", VM_NAME_PREFIX, role.prefix(), index)
}

/// Sizing of a single role within a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSizing {
    pub memory: u64,
    pub cpus: u32,
    #[serde(default = "default_node_count")]
    pub count: u32,
}

fn default_node_count() -> u32 {
    1
}

/// A named sizing model: per-role memory (MB), cpus and node counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelProfile {
    pub master: RoleSizing,
    pub worker: RoleSizing,
    #[serde(alias = "loadbalancer")]
    pub lb: RoleSizing,
    pub storage: RoleSizing,
}

impl ModelProfile {
    pub fn sizing(&self, role: Role) -> &RoleSizing {
        match role {
            Role::Master => &self.master,
            Role::Worker => &self.worker,
            Role::LoadBalancer => &self.lb,
            Role::Storage => &self.storage,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoleUsage {
    pub role: Role,
    pub count: u32,
    pub memory_mb: u64,
    pub cpus: u32,
    pub total_memory_mb: u64,
    pub total_cpus: u32,
}

/// Aggregate resource requirements derived from one model.
#[derive(Debug, Clone)]
pub struct ResourceSummary {
    pub per_role: Vec<RoleUsage>,
    pub total_memory_mb: u64,
    pub total_cpus: u32,
}

/// Everything the orchestrator needs for one run, fixed at startup.
#[derive(Debug, Clone)]
pub struct DeployPlan {
    pub model: String,
    pub profile: ModelProfile,
    pub full: bool,
    pub air_gapped: bool,
    pub dry_run: bool,
    pub airgap_registries_conf: PathBuf,
}
