use crate::config::ServerConfig;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration. Every field is optional; anything missing
/// falls back to `ServerConfig::default()`.
///
/// ```toml
/// [server]
/// bind_addr = "0.0.0.0"
/// port = 8080
///
/// [monitoring]
/// enabled = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind_addr: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn into_server_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        let server = self.server.unwrap_or(ServerSection {
            bind_addr: None,
            port: None,
        });

        ServerConfig {
            bind_addr: server.bind_addr.unwrap_or(defaults.bind_addr),
            port: server.port.unwrap_or(defaults.port),
            monitor: self.monitoring.map(|m| m.enabled).unwrap_or(defaults.monitor),
        }
    }
}
