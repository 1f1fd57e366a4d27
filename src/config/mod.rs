pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

use toml_config::TomlConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "math-api")]
#[command(about = "A small HTTP API exposing prime checks and factorials")]
pub struct CliConfig {
    /// Address to bind; overrides the config file when set
    #[arg(long)]
    pub bind_addr: Option<String>,

    /// Port to bind; overrides the config file when set
    #[arg(long)]
    pub port: Option<u16>,

    /// Path to an optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    pub monitor: Option<bool>,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Settings the server actually runs with, after merging defaults, the
/// optional TOML file, and CLI overrides (CLI wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub monitor: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            monitor: false,
        }
    }
}

impl ServerConfig {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?.into_server_config(),
            None => ServerConfig::default(),
        };

        // 命令列優先於設定檔
        if let Some(bind_addr) = &cli.bind_addr {
            config.bind_addr = bind_addr.clone();
        }
        if let Some(port) = cli.port {
            config.port = port;
        }
        if let Some(monitor) = cli.monitor {
            config.monitor = monitor;
        }

        Ok(config)
    }
}

impl ConfigProvider for ServerConfig {
    fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn monitor_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_bind_addr("bind_addr", &self.bind_addr)?;
        validation::validate_port("port", self.port)?;
        Ok(())
    }
}
