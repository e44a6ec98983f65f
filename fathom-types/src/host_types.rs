//! Request and response shapes exchanged with the reporting platform.
//!
//! Field names follow the platform's camelCase JSON.
use crate::errors::config::ConfigError;
use crate::types::{Row, Schema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataRequest {
    #[serde(default)]
    pub config_params: ConfigParams,
    pub date_range: DateRange,
    #[serde(default)]
    pub fields: Vec<RequestedField>,
}

impl DataRequest {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Requested field ids in the order the caller asked for them.
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

/// Values the user entered on the configuration screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConfigParams {
    /// Not validated: an empty or malformed value surfaces as a failed fetch.
    #[serde(default)]
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathname_id: Option<String>,
}

/// Inclusive bounds, kept as the host sent them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestedField {
    pub name: String,
}

impl RequestedField {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataResponse {
    pub schema: Schema,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaResponse {
    pub schema: Schema,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthType {
    None,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthTypeResponse {
    #[serde(rename = "type")]
    pub auth_type: AuthType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ConfigEntry {
    #[serde(rename = "INFO")]
    Info { name: String, text: String },
    #[serde(rename = "TEXTINPUT", rename_all = "camelCase")]
    TextInput {
        name: String,
        display_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        help_text: Option<String>,
    },
}

impl ConfigEntry {
    pub fn name(&self) -> &str {
        match self {
            ConfigEntry::Info { name, .. } | ConfigEntry::TextInput { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub config_params: Vec<ConfigEntry>,
    pub date_range_required: bool,
}
