pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

use self::toml_config::TomlConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-tools")]
#[command(about = "A small collection of web utility tools behind one HTTP API")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to bind (overrides config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config file)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory for the contact log (overrides config file)
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Enable periodic system stats logging
    #[arg(long)]
    pub monitor: bool,
}

/// 合併後的執行設定：預設值 < TOML 檔 < 命令列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: String,
    pub monitor_enabled: bool,
    pub monitor_interval_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            data_dir: "./data".to_string(),
            monitor_enabled: false,
            monitor_interval_seconds: 60,
        }
    }
}

impl AppConfig {
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let mut config = Self::default();

        if let Some(file) = file {
            if let Some(host) = file.host() {
                config.host = host.to_string();
            }
            if let Some(port) = file.port() {
                config.port = port;
            }
            if let Some(data_dir) = file.data_dir() {
                config.data_dir = data_dir.to_string();
            }
            config.monitor_enabled = file.monitoring_enabled();
            config.monitor_interval_seconds = file.monitoring_interval_seconds();
        }

        if let Some(host) = &cli.host {
            config.host = host.clone();
        }
        if let Some(port) = cli.port {
            config.port = port;
        }
        if let Some(data_dir) = &cli.data_dir {
            config.data_dir = data_dir.clone();
        }
        if cli.monitor {
            config.monitor_enabled = true;
        }

        config
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("host", &self.host)?;
        validation::validate_positive_number("port", self.port as usize, 1)?;
        validation::validate_path("data_dir", &self.data_dir)?;
        validation::validate_positive_number(
            "monitoring.interval_seconds",
            self.monitor_interval_seconds as usize,
            1,
        )?;
        Ok(())
    }
}
