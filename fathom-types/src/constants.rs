pub const DEFAULT_CONFIG_PATH: &str = "fathom-config.yaml";

pub const DEFAULT_APP_NAME: &str = "fathom";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Text shown above the configuration inputs in the host UI.
pub const CONFIG_INSTRUCTIONS: &str = "Enter details of Datasette data set to fetch.";
