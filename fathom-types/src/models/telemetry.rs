use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,

    #[serde(default = "TelemetryConfig::default_ansi")]
    pub ansi: bool,

    #[serde(default)]
    pub with_target: bool,
}

impl TelemetryConfig {
    pub fn default_ansi() -> bool {
        true
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            ansi: Self::default_ansi(),
            with_target: false,
        }
    }
}
