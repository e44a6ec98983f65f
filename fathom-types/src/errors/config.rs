use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {0:?}: {1}")]
    CannotReadFile(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse request json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} is missing, set it in the config file or on the command line")]
    MissingField(&'static str),
}
