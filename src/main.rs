use clap::Parser;
use potager_reco::config::cli::{Command, RecommendArgs, TipArgs};
use potager_reco::domain::ports::Clock;
use potager_reco::utils::error::ErrorSeverity;
use potager_reco::utils::{logger, validation::Validate};
use potager_reco::{
    AiRecommendationClient, AppConfig, CliConfig, DailyTipSelector, FallbackRecommendationEngine,
    FixedClock, GardenProfile, PlantCatalog, RecommendationOrchestrator, Result,
    SystemClock,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting potager-reco CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli).await {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ potager-reco failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
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

    Ok(())
}

async fn run(cli: CliConfig) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    };

    // 驗證配置
    config.validate()?;
    tracing::debug!("✅ Configuration loaded and validated successfully");

    match cli.command {
        Command::Recommend(args) => recommend(config, args).await,
        Command::Tip(args) => tip(args),
        Command::CheckCatalog { catalog } => check_catalog(&config, catalog),
    }
}

fn load_profile(path: &str) -> Result<GardenProfile> {
    let profile = GardenProfile::from_file(path)?;
    profile.validate()?;
    tracing::debug!(
        "Loaded garden profile for {} with {} plants",
        profile.region,
        profile.plants.len()
    );
    Ok(profile)
}

fn clock_for(date: Option<chrono::NaiveDate>) -> Arc<dyn Clock> {
    match date {
        Some(date) => Arc::new(FixedClock(date)),
        None => Arc::new(SystemClock),
    }
}

async fn recommend(mut config: AppConfig, args: RecommendArgs) -> Result<()> {
    let profile = load_profile(&args.profile)?;

    if args.offline {
        tracing::info!("🔌 Offline mode: AI recommendations disabled");
        config.ai.enabled = Some(false);
    }

    let catalog = Arc::new(config.load_catalog()?);
    let fallback = FallbackRecommendationEngine::new(catalog, clock_for(args.date));
    let orchestrator =
        RecommendationOrchestrator::new(AiRecommendationClient::new(config), fallback);

    let response = orchestrator.recommend(&profile).await?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(())
}

fn tip(args: TipArgs) -> Result<()> {
    let profile = load_profile(&args.profile)?;
    let today = clock_for(args.date).today();

    println!("{}", DailyTipSelector::new().tip_of_the_day(&profile, today));
    Ok(())
}

fn check_catalog(config: &AppConfig, catalog: Option<String>) -> Result<()> {
    let loaded = match catalog {
        Some(path) => PlantCatalog::from_file(&path)?,
        None => config.load_catalog()?,
    };
    loaded.validate()?;

    println!("✅ Plant catalog is complete");
    Ok(())
}
