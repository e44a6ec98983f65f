pub mod constants;
pub mod errors;
pub mod host_types;
pub mod models;
pub mod types;

// Re-exports
#[macro_use]
pub extern crate prettytable;

pub use schemars;
pub use serde;
pub use serde_json;
pub use serde_yaml;
pub use thiserror;
pub use tracing;
