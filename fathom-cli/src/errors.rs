use fathom_types::errors::config::ConfigError;
use fathom_types::errors::connector::ConnectorError;
use fathom_types::{serde_json, thiserror, thiserror::Error};
use std::path::PathBuf;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Connector(#[from] ConnectorError),
    #[error("Cannot read request file {0:?}: {1}")]
    CannotReadRequest(PathBuf, #[source] std::io::Error),
    #[error("Failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
