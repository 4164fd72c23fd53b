use clap::Parser;
use clone_demo::utils::{logger, validation::Validate};
use clone_demo::{CliConfig, CloneDemo, DemoError, OutputFormat, ProfileConfig, Scenario};

fn load_profile(config: &CliConfig) -> Result<ProfileConfig, DemoError> {
    let profile = match &config.profile {
        Some(path) => {
            tracing::info!("📁 Loading profile from: {}", path);
            ProfileConfig::from_file(path)?
        }
        None => ProfileConfig::default(),
    };
    profile.validate()?;
    Ok(profile)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Json => logger::init_json_logger(),
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    let result = load_profile(&config).and_then(|profile| {
        let demo = CloneDemo::new(Scenario::with_profile(profile))
            .with_mode(config.mode)
            .with_format(config.format);
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        demo.run(&mut out)
    });

    match result {
        Ok(report) => {
            let leaked = report.leaked_steps();
            if leaked.is_empty() {
                tracing::info!("✅ The clone stayed independent of the original");
            } else {
                tracing::warn!("🔶 The clone changed after: {}", leaked.join("; "));
            }
            Ok(())
        }
        Err(e) => {
            // 不拿半成品繼續, 直接依錯誤類型退出
            tracing::error!("❌ Clone demo failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
