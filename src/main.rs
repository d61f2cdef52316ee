use caasp_deploy::core::resources;
use caasp_deploy::domain::model::{DeployPlan, AIRGAP_REGISTRIES_CONF};
use caasp_deploy::domain::ports::HostProbe;
use caasp_deploy::utils::error::{ErrorCategory, ErrorSeverity};
use caasp_deploy::utils::{logger, validation::Validate};
use caasp_deploy::{
    DeployArgs, DeployEngine, DeployError, ModelsConfig, StdinPrompt, SysinfoProbe, VagrantTool,
};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match DeployArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting caasp-deploy");
    if args.verbose > 0 {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 驗證配置
    if let Err(e) = args.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 載入模型配置
    tracing::info!("📁 Loading models from: {}", args.config);
    let models = match ModelsConfig::from_file(&args.config) {
        Ok(models) => models,
        Err(e) => {
            eprintln!("❌ Failed to load models file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid YAML");
            std::process::exit(1);
        }
    };

    if let Err(e) = models.validate() {
        tracing::error!("❌ Models file validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 驗證模型名稱（必須在資源計算之前）
    let profile = match models.resolve(&args.model) {
        Ok(profile) => profile.clone(),
        Err(e) => {
            println!("❌ {}", e.user_friendly_message());
            println!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 計算資源需求
    let summary = resources::compute_totals(&profile);
    let available_mb = SysinfoProbe::new().available_memory_mb();
    resources::display_summary(&args.model, &summary, available_mb);

    if let Err(e) = resources::ensure_memory(
        &summary,
        available_mb,
        &StdinPrompt,
        args.memory_check_enabled(),
    ) {
        // declined prompt aborts cleanly, no diagnostic beyond the prompt
        tracing::info!("{}", e);
        std::process::exit(1);
    }

    let plan = DeployPlan {
        model: args.model.clone(),
        profile,
        full: args.full,
        air_gapped: args.air_gapped,
        dry_run: args.dry_run,
        airgap_registries_conf: PathBuf::from(AIRGAP_REGISTRIES_CONF),
    };

    // 創建部署引擎並運行
    let engine = DeployEngine::new(VagrantTool::new(args.model.clone()), plan);

    match engine.run().await {
        Ok(outcome) => {
            tracing::info!("✅ caasp-deploy finished ({:?})", outcome);
        }
        Err(e) => {
            tracing::error!(
                "❌ Deployment failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            // delegated tool failures surface the child's own exit status
            if let DeployError::CommandFailedError { exit_code, .. } = &e {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(exit_code.unwrap_or(1));
            }

            match e.category() {
                ErrorCategory::Configuration => {
                    println!("❌ {}", e.user_friendly_message());
                    println!("💡 建議: {}", e.recovery_suggestion());
                }
                _ => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 建議: {}", e.recovery_suggestion());
                }
            }

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
