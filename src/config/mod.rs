pub mod models;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "caasp-deploy")]
#[command(about = "Bring up a CaaSP cluster of VMs sized by a named model")]
#[command(disable_help_flag = true)]
pub struct DeployArgs {
    /// Sizing model to deploy, as declared in the models file
    #[arg(short, long)]
    pub model: String,

    /// Path to the models configuration file
    #[arg(short, long, default_value = "models.yaml")]
    pub config: String,

    /// Run the full cluster bootstrap on the first master after bring-up
    #[arg(short, long)]
    pub full: bool,

    /// Configure air-gapped image registries on the cluster nodes
    #[arg(short, long)]
    pub air_gapped: bool,

    /// Skip the host memory check
    #[arg(short, long)]
    pub ignore_memory: bool,

    /// Dry run - show what would be deployed without starting any VM
    #[arg(short = 't', long = "test")]
    pub dry_run: bool,

    /// Verbosity level (0 = info, 1 = debug, 2+ = trace)
    #[arg(short, long, value_name = "LEVEL", default_value_t = 0)]
    pub verbose: u8,

    /// Ignored positional tokens
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Print help
    #[arg(short = 'h', long = "help", short_alias = '?', action = clap::ArgAction::Help)]
    help: Option<bool>,
}

impl DeployArgs {
    pub fn memory_check_enabled(&self) -> bool {
        !self.ignore_memory
    }
}

impl Validate for DeployArgs {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("model", &self.model)
    }
}
