use super::{connection::DatasetteConfig, telemetry::TelemetryConfig};
use crate::constants::DEFAULT_APP_NAME;
use crate::errors::config::ConfigError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default = "AppConfig::default_app_name")]
    pub app_name: String,

    #[serde(default)]
    pub connection: DatasetteConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<TelemetryConfig>,
}

impl AppConfig {
    pub fn default_app_name() -> String {
        DEFAULT_APP_NAME.to_string()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::CannotReadFile(path.to_path_buf(), e))?;
        Self::from_yaml_str(&contents)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: Self::default_app_name(),
            connection: DatasetteConfig::default(),
            telemetry: None,
        }
    }
}
