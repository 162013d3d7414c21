use clap::Parser;
use small_tools::config::toml_config::TomlConfig;
use small_tools::utils::monitor::{self, SystemMonitor};
use small_tools::utils::{logger, validation::Validate};
use small_tools::{
    create_router, AppConfig, AppState, CliConfig, FileContactLog, Server, ServerConfig,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting small-tools service");

    // 載入 TOML 配置 (可選)
    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => Some(config),
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => None,
    };

    let config = AppConfig::resolve(&cli, file_config.as_ref());
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
        monitor::spawn_periodic(
            SystemMonitor::new(true),
            Duration::from_secs(config.monitor_interval_seconds),
        );
    }

    let store = Arc::new(FileContactLog::new(&config.data_dir));
    let state = AppState::new(store);
    let router = create_router(state);

    let server = Server::new(ServerConfig::new(config.host.clone(), config.port));
    server.run(router).await
}
