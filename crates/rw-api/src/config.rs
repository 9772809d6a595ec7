//! Session configuration.

use rw_core::RwError;
use rw_round::RoundingPolicy;
use serde::{Deserialize, Serialize};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse session config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid session config: {0}")]
    Invalid(#[from] RwError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub rounding: RoundingPolicy,
    /// Emit a comment header before exported LaTeX commands.
    pub export_preamble: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rounding: RoundingPolicy::default(),
            export_preamble: true,
        }
    }
}

impl SessionConfig {
    /// Parse and validate. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.rounding.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
