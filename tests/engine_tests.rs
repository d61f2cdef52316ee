use async_trait::async_trait;
use caasp_deploy::core::engine::{DeployEngine, Outcome};
use caasp_deploy::domain::model::{DeployPlan, ModelProfile, RoleSizing};
use caasp_deploy::domain::ports::Hypervisor;
use caasp_deploy::DeployError;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct FakeHypervisor {
    calls: Arc<Mutex<Vec<String>>>,
    fail_on_start: Option<String>,
}

impl FakeHypervisor {
    fn failing_on(vm: &str) -> Self {
        Self {
            fail_on_start: Some(vm.to_string()),
            ..Self::default()
        }
    }

    async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Hypervisor for FakeHypervisor {
    async fn start_vm(&self, name: &str) -> caasp_deploy::Result<()> {
        if self.fail_on_start.as_deref() == Some(name) {
            return Err(DeployError::CommandFailedError {
                command: format!("vagrant up {}", name),
                exit_code: Some(1),
            });
        }
        self.calls.lock().await.push(format!("up {}", name));
        Ok(())
    }

    async fn run_script(&self, vm: &str, script: &str, as_root: bool) -> caasp_deploy::Result<()> {
        self.calls
            .lock()
            .await
            .push(format!("ssh {} {} root={}", vm, script, as_root));
        Ok(())
    }
}

fn profile(masters: u32, workers: u32, lbs: u32, storages: u32) -> ModelProfile {
    let sizing = |count| RoleSizing {
        memory: 4096,
        cpus: 2,
        count,
    };
    ModelProfile {
        master: sizing(masters),
        worker: sizing(workers),
        lb: sizing(lbs),
        storage: sizing(storages),
    }
}

fn plan(profile: ModelProfile) -> DeployPlan {
    DeployPlan {
        model: "minimal".to_string(),
        profile,
        full: false,
        air_gapped: false,
        dry_run: false,
        airgap_registries_conf: PathBuf::from("air-gap.d/air-gapped-registries.conf"),
    }
}

#[tokio::test]
async fn test_dry_run_performs_no_operations() {
    let hypervisor = FakeHypervisor::default();
    let mut plan = plan(profile(1, 1, 1, 1));
    plan.dry_run = true;

    let engine = DeployEngine::new(hypervisor.clone(), plan);
    let outcome = engine.run().await.unwrap();

    assert_eq!(outcome, Outcome::DryRun);
    assert!(hypervisor.calls().await.is_empty());
}

#[tokio::test]
async fn test_bring_up_order_and_names() {
    let hypervisor = FakeHypervisor::default();
    let engine = DeployEngine::new(hypervisor.clone(), plan(profile(2, 2, 1, 1)));

    let outcome = engine.run().await.unwrap();

    assert_eq!(outcome, Outcome::Deployed);
    assert_eq!(
        hypervisor.calls().await,
        vec![
            "up caasp-master-1",
            "up caasp-master-2",
            "up caasp-worker-1",
            "up caasp-worker-2",
            "up caasp-lb-1",
            "up caasp-storage-1",
        ]
    );
}

#[tokio::test]
async fn test_zero_count_roles_are_skipped() {
    let hypervisor = FakeHypervisor::default();
    let engine = DeployEngine::new(hypervisor.clone(), plan(profile(1, 2, 0, 0)));

    engine.run().await.unwrap();

    let calls = hypervisor.calls().await;
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| !c.contains("caasp-lb")));
    assert!(calls.iter().all(|c| !c.contains("caasp-storage")));
}

#[tokio::test]
async fn test_missing_airgap_config_halts_before_vm_work() {
    let hypervisor = FakeHypervisor::default();
    let mut plan = plan(profile(1, 1, 1, 1));
    plan.air_gapped = true;
    plan.airgap_registries_conf = PathBuf::from("/nonexistent/air-gapped-registries.conf");

    let engine = DeployEngine::new(hypervisor.clone(), plan);
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, DeployError::MissingAirGapConfigError { .. }));
    assert!(hypervisor.calls().await.is_empty());
}

#[tokio::test]
async fn test_missing_airgap_config_beats_dry_run() {
    let hypervisor = FakeHypervisor::default();
    let mut plan = plan(profile(1, 1, 1, 1));
    plan.air_gapped = true;
    plan.dry_run = true;
    plan.airgap_registries_conf = PathBuf::from("/nonexistent/air-gapped-registries.conf");

    let engine = DeployEngine::new(hypervisor.clone(), plan);
    assert!(engine.run().await.is_err());
}

#[tokio::test]
async fn test_airgap_prep_runs_on_masters_then_workers() {
    let dir = tempfile::tempdir().unwrap();
    let conf = dir.path().join("air-gapped-registries.conf");
    std::fs::write(&conf, "registry.example.local:5000\n").unwrap();

    let hypervisor = FakeHypervisor::default();
    let mut plan = plan(profile(2, 1, 0, 0));
    plan.air_gapped = true;
    plan.airgap_registries_conf = conf;

    let engine = DeployEngine::new(hypervisor.clone(), plan);
    engine.run().await.unwrap();

    let calls = hypervisor.calls().await;
    assert_eq!(
        calls,
        vec![
            "up caasp-master-1",
            "up caasp-master-2",
            "up caasp-worker-1",
            "ssh caasp-master-1 /vagrant/deploy/100.prep_airgap.sh root=true",
            "ssh caasp-master-2 /vagrant/deploy/100.prep_airgap.sh root=true",
            "ssh caasp-worker-1 /vagrant/deploy/100.prep_airgap.sh root=true",
        ]
    );
}

#[tokio::test]
async fn test_full_deployment_targets_first_master_as_non_root() {
    let hypervisor = FakeHypervisor::default();
    let mut plan = plan(profile(3, 1, 0, 0));
    plan.full = true;

    let engine = DeployEngine::new(hypervisor.clone(), plan);
    engine.run().await.unwrap();

    let calls = hypervisor.calls().await;
    assert_eq!(
        calls.last().unwrap(),
        "ssh caasp-master-1 /vagrant/deploy/99.run-all.sh root=false"
    );
    let bootstrap_calls = calls.iter().filter(|c| c.contains("run-all")).count();
    assert_eq!(bootstrap_calls, 1);
}

#[tokio::test]
async fn test_first_start_failure_aborts_the_sequence() {
    let hypervisor = FakeHypervisor::failing_on("caasp-worker-1");
    let engine = DeployEngine::new(hypervisor.clone(), plan(profile(2, 1, 1, 1)));

    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, DeployError::CommandFailedError { .. }));
    assert_eq!(
        hypervisor.calls().await,
        vec!["up caasp-master-1", "up caasp-master-2"]
    );
}
