//! Runtime configuration loaded from TOML

use std::path::Path;

use anyhow::Context;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::inventory::ContainerKind;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Outbound delivery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Messages queued per client before further ones are dropped
    pub client_queue_capacity: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            client_queue_capacity: 256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter, used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainersConfig {
    /// Drop crafting grid contents when the last viewer closes it
    pub eject_workbench_on_close: bool,
}

impl Default for ContainersConfig {
    fn default() -> Self {
        Self {
            eject_workbench_on_close: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub logging: LoggingConfig,
    pub containers: ContainersConfig,
}

impl Config {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
    
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.client_queue_capacity == 0 {
            return Err(ConfigError::Invalid(
                "network.client_queue_capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
    
    /// Whether containers of `kind` drop their items when the last viewer leaves
    pub fn ejects_on_close(&self, kind: ContainerKind) -> bool {
        match kind {
            ContainerKind::Workbench => self.containers.eject_workbench_on_close,
            other => other.ejects_on_close(),
        }
    }
}

/// Read configuration from a file
pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = Config::from_toml_str(&raw)
        .with_context(|| format!("Failed to load config file {}", path.display()))?;
    Ok(config)
}
