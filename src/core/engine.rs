use crate::domain::model::{vm_name, DeployPlan, Role, AIRGAP_PREP_SCRIPT, RUN_ALL_SCRIPT};
use crate::domain::ports::Hypervisor;
use crate::utils::error::{DeployError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    DryRun,
    Deployed,
}

/// Linear orchestrator. Steps run in strict order, each gated on its
/// precondition; the first failed hypervisor call aborts the rest.
pub struct DeployEngine<H: Hypervisor> {
    hypervisor: H,
    plan: DeployPlan,
}

impl<H: Hypervisor> DeployEngine<H> {
    pub fn new(hypervisor: H, plan: DeployPlan) -> Self {
        Self { hypervisor, plan }
    }

    pub async fn run(&self) -> Result<Outcome> {
        if self.plan.air_gapped {
            self.check_airgap_config()?;
        }

        if self.plan.dry_run {
            println!("🔍 Dry run complete - no VMs were started.");
            println!("Re-run without --test to start the deployment.");
            return Ok(Outcome::DryRun);
        }

        self.bring_up().await?;

        if self.plan.air_gapped {
            self.configure_airgap().await?;
        }

        if self.plan.full {
            self.run_full_deployment().await?;
        }

        self.print_banner();
        Ok(Outcome::Deployed)
    }

    /// Air-gapped runs need the registries file before any VM work starts;
    /// the VMs pick it up during remote configuration later.
    fn check_airgap_config(&self) -> Result<()> {
        let path = &self.plan.airgap_registries_conf;
        if !path.exists() {
            return Err(DeployError::MissingAirGapConfigError {
                path: path.display().to_string(),
            });
        }

        tracing::info!(
            "air-gapped registries found at {}, node configuration deferred until bring-up completes",
            path.display()
        );
        Ok(())
    }

    async fn bring_up(&self) -> Result<()> {
        println!(
            "🚀 Starting cluster VMs for model '{}'...",
            self.plan.model
        );

        for role in Role::ALL {
            let sizing = self.plan.profile.sizing(role);
            for index in 1..=sizing.count {
                let name = vm_name(role, index);
                println!("  • Starting {}...", name);
                self.hypervisor.start_vm(&name).await?;
            }
        }

        println!("✅ All VMs started");
        Ok(())
    }

    async fn configure_airgap(&self) -> Result<()> {
        println!("🔧 Configuring air-gapped registries on cluster nodes...");

        for role in [Role::Master, Role::Worker] {
            let sizing = self.plan.profile.sizing(role);
            for index in 1..=sizing.count {
                let name = vm_name(role, index);
                println!("  • Preparing {}...", name);
                self.hypervisor
                    .run_script(&name, AIRGAP_PREP_SCRIPT, true)
                    .await?;
            }
        }

        println!("✅ Air-gapped registries configured");
        Ok(())
    }

    async fn run_full_deployment(&self) -> Result<()> {
        if self.plan.profile.master.count == 0 {
            tracing::warn!("full deployment requested but the model has no master nodes, skipping");
            return Ok(());
        }

        let first_master = vm_name(Role::Master, 1);
        println!("🎯 Running full cluster bootstrap on {}...", first_master);
        self.hypervisor
            .run_script(&first_master, RUN_ALL_SCRIPT, false)
            .await?;
        println!("✅ Cluster bootstrap finished");
        Ok(())
    }

    fn print_banner(&self) {
        println!();
        println!("🎉 Cluster VMs are up!");
        println!("Next steps:");
        println!("  • vagrant ssh {}", vm_name(Role::Master, 1));
        if !self.plan.full {
            println!(
                "  • run {} on the first master to bootstrap the cluster",
                RUN_ALL_SCRIPT
            );
        }
        println!("  • vagrant destroy -f   when you are done with the cluster");
    }
}
