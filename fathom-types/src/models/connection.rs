use crate::host_types::ConfigParams;
use prettytable::Table;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the Datasette instance serving the Fathom database lives.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct DatasetteConfig {
    /// Base URL of the data set, e.g. `https://datasette.example.com:8080/fathom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// `pathname_id` the page stats are scoped to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathname_id: Option<String>,

    /// Overrides the HTTP client's default timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl DatasetteConfig {
    pub fn to_config_params(&self) -> ConfigParams {
        ConfigParams {
            base_url: self.base_url.clone().unwrap_or_default(),
            pathname_id: self.pathname_id.clone(),
        }
    }

    pub fn convert_to_table(&self) -> Table {
        let timeout = self
            .timeout_secs
            .map_or_else(|| "default".to_string(), |secs| format!("{secs}s"));
        table!(
            ["base_url", self.base_url.as_deref().unwrap_or("")],
            ["pathname_id", self.pathname_id.as_deref().unwrap_or("")],
            ["timeout", timeout]
        )
    }
}
