use crate::domain::model::{ModelProfile, ResourceSummary, Role, RoleUsage};
use crate::domain::ports::UserPrompt;
use crate::utils::error::{DeployError, Result};

/// Multiply per-role sizing by node counts to get cluster totals.
pub fn compute_totals(profile: &ModelProfile) -> ResourceSummary {
    let mut per_role = Vec::with_capacity(Role::ALL.len());
    let mut total_memory_mb = 0u64;
    let mut total_cpus = 0u32;

    for role in Role::ALL {
        let sizing = profile.sizing(role);
        let role_memory = sizing.memory * u64::from(sizing.count);
        let role_cpus = sizing.cpus * sizing.count;

        per_role.push(RoleUsage {
            role,
            count: sizing.count,
            memory_mb: sizing.memory,
            cpus: sizing.cpus,
            total_memory_mb: role_memory,
            total_cpus: role_cpus,
        });

        total_memory_mb += role_memory;
        total_cpus += role_cpus;
    }

    ResourceSummary {
        per_role,
        total_memory_mb,
        total_cpus,
    }
}

pub fn display_summary(model: &str, summary: &ResourceSummary, available_mb: u64) {
    println!("📋 Resource summary for model '{}':", model);

    for usage in &summary.per_role {
        println!(
            "  {:<14} {} node(s) × {}MB / {} cpu(s)  =>  {}MB, {} cpus",
            usage.role.display_name(),
            usage.count,
            usage.memory_mb,
            usage.cpus,
            usage.total_memory_mb,
            usage.total_cpus
        );
    }

    println!("  Total memory needed:   {}MB", summary.total_memory_mb);
    println!("  Total cpus needed:     {}", summary.total_cpus);
    println!("  Host memory available: {}MB", available_mb);
    println!();
}

/// Memory gate: when enabled and the cluster needs more than the host has,
/// ask for confirmation; a declined prompt aborts the whole run.
pub fn ensure_memory(
    summary: &ResourceSummary,
    available_mb: u64,
    prompt: &dyn UserPrompt,
    check_enabled: bool,
) -> Result<()> {
    if !check_enabled {
        tracing::debug!("memory check disabled, skipping");
        return Ok(());
    }

    if summary.total_memory_mb <= available_mb {
        return Ok(());
    }

    println!(
        "⚠️  The cluster needs {}MB but only {}MB is available on this host.",
        summary.total_memory_mb, available_mb
    );

    if prompt.confirm("Continue anyway?")? {
        tracing::warn!(
            "continuing with {}MB needed over {}MB available",
            summary.total_memory_mb,
            available_mb
        );
        Ok(())
    } else {
        Err(DeployError::AbortedError {
            reason: "memory check declined".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RoleSizing;

    struct FixedPrompt(bool);

    impl UserPrompt for FixedPrompt {
        fn confirm(&self, _question: &str) -> Result<bool> {
            Ok(self.0)
        }
    }

    struct PanicPrompt;

    impl UserPrompt for PanicPrompt {
        fn confirm(&self, _question: &str) -> Result<bool> {
            panic!("prompt must not be shown");
        }
    }

    fn uniform_profile(memory: u64, cpus: u32, count: u32) -> ModelProfile {
        let sizing = RoleSizing {
            memory,
            cpus,
            count,
        };
        ModelProfile {
            master: sizing.clone(),
            worker: sizing.clone(),
            lb: sizing.clone(),
            storage: sizing,
        }
    }

    #[test]
    fn test_totals_are_exact_sums() {
        // 1 of each role at 4096MB => 16384MB total
        let summary = compute_totals(&uniform_profile(4096, 2, 1));
        assert_eq!(summary.total_memory_mb, 16384);
        assert_eq!(summary.total_cpus, 8);
        assert_eq!(summary.per_role.len(), 4);
    }

    #[test]
    fn test_totals_respect_counts() {
        let mut profile = uniform_profile(2048, 2, 1);
        profile.worker.count = 3;
        profile.storage.count = 0;

        let summary = compute_totals(&profile);
        assert_eq!(summary.total_memory_mb, 2048 * 5);
        assert_eq!(summary.total_cpus, 2 * 5);
    }

    #[test]
    fn test_memory_shortfall_confirmed_continues() {
        let summary = compute_totals(&uniform_profile(4096, 2, 1));
        assert!(ensure_memory(&summary, 8192, &FixedPrompt(true), true).is_ok());
    }

    #[test]
    fn test_memory_shortfall_declined_aborts() {
        let summary = compute_totals(&uniform_profile(4096, 2, 1));
        let err = ensure_memory(&summary, 8192, &FixedPrompt(false), true).unwrap_err();
        assert!(matches!(err, DeployError::AbortedError { .. }));
    }

    #[test]
    fn test_check_disabled_never_prompts() {
        let summary = compute_totals(&uniform_profile(4096, 2, 1));
        assert!(ensure_memory(&summary, 0, &PanicPrompt, false).is_ok());
    }

    #[test]
    fn test_sufficient_memory_never_prompts() {
        let summary = compute_totals(&uniform_profile(1024, 1, 1));
        assert!(ensure_memory(&summary, 65536, &PanicPrompt, true).is_ok());
    }
}
