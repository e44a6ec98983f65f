pub mod catalog;
pub mod config_sink;
pub mod connector;
pub mod fetch;
pub mod projector;
pub mod query;
pub mod response;

use std::fmt::Debug;

use fathom_types::errors::connector::ConnectorError;
use fathom_types::host_types::{
    AuthTypeResponse, ConfigResponse, DataRequest, DataResponse, SchemaResponse,
};
use fathom_types::types::FieldType;

pub use catalog::{FieldCatalog, FieldRequest, KnownField, RequestedColumn};
pub use config_sink::{ConfigBuilder, ConfigSchemaSink};
pub use connector::DatasetteConnector;
pub use fathom_types;
pub use fetch::{HttpFetcher, ReqwestFetcher};

/// A community connector as seen by the reporting platform.
pub trait Connector: Debug {
    /// Returns all the remote columns and their corresponding field types.
    /// Columns the connector does not expose map to `None`.
    fn types_mapping() -> Vec<(String, Option<FieldType>)>
    where
        Self: Sized;

    fn auth_type(&self) -> AuthTypeResponse;

    fn is_admin_user(&self) -> bool;

    /// Declares the configuration inputs shown to the user.
    fn declare_config(&self, sink: &mut dyn ConfigSchemaSink);

    /// Declares every field the connector can provide.
    fn declare_fields(&self, sink: &mut dyn ConfigSchemaSink);

    fn get_config(&self) -> ConfigResponse {
        let mut builder = ConfigBuilder::new();
        self.declare_config(&mut builder);
        builder.build_config()
    }

    fn get_schema(&self) -> SchemaResponse {
        let mut builder = ConfigBuilder::new();
        self.declare_fields(&mut builder);
        builder.build_schema()
    }

    /// Fetches and projects the rows for one data request. Any fetch or parse
    /// failure aborts the whole request.
    fn get_data(&self, request: &DataRequest) -> Result<DataResponse, ConnectorError>;
}
