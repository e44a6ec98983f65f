mod helper;
pub mod types;

pub use helper::{build_data_request, execute, load_config, resolve_connection, DESCRIPTION};
