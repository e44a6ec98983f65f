use crate::catalog::{FieldCatalog, KnownField};
use crate::config_sink::ConfigSchemaSink;
use crate::fetch::HttpFetcher;
use crate::projector::project;
use crate::query::{build_query_url, PAGE_STATS_COLUMNS};
use crate::response::parse_rows;
use crate::Connector;
use fathom_types::constants::CONFIG_INSTRUCTIONS;
use fathom_types::errors::connector::ConnectorError;
use fathom_types::host_types::{AuthType, AuthTypeResponse, DataRequest, DataResponse};
use fathom_types::tracing::{debug, info, warn};
use fathom_types::types::FieldType;

pub const INSTRUCTIONS_ID: &str = "instructions";
pub const BASE_URL_PARAM: &str = "baseUrl";
pub const PATHNAME_ID_PARAM: &str = "pathnameId";

/// Serves Fathom page stats from a Datasette instance.
#[derive(Debug)]
pub struct DatasetteConnector<F> {
    fetcher: F,
    catalog: &'static FieldCatalog,
}

impl<F: HttpFetcher> DatasetteConnector<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            catalog: FieldCatalog::global(),
        }
    }

    pub fn catalog(&self) -> &FieldCatalog {
        self.catalog
    }

    /// The URL `get_data` would fetch for `request`.
    pub fn query_url(&self, request: &DataRequest) -> Result<String, ConnectorError> {
        let pathname_id = request
            .config_params
            .pathname_id
            .as_deref()
            .ok_or(ConnectorError::MissingConfiguration(PATHNAME_ID_PARAM))?;
        Ok(build_query_url(
            &request.config_params.base_url,
            pathname_id,
            &request.date_range,
        ))
    }
}

impl<F: HttpFetcher + std::fmt::Debug> Connector for DatasetteConnector<F> {
    fn types_mapping() -> Vec<(String, Option<FieldType>)>
    where
        Self: Sized,
    {
        PAGE_STATS_COLUMNS
            .iter()
            .map(|column| {
                (
                    column.to_string(),
                    KnownField::from_source_column(column).map(KnownField::field_type),
                )
            })
            .collect()
    }

    fn auth_type(&self) -> AuthTypeResponse {
        AuthTypeResponse {
            auth_type: AuthType::None,
        }
    }

    fn is_admin_user(&self) -> bool {
        true
    }

    fn declare_config(&self, sink: &mut dyn ConfigSchemaSink) {
        sink.info(INSTRUCTIONS_ID, CONFIG_INSTRUCTIONS);
        sink.text_input(
            BASE_URL_PARAM,
            "Enter the base URL for the data set in Datasette",
            Some("e.g. https://datasette.example.com:8080/fathom"),
        );
        sink.text_input(
            PATHNAME_ID_PARAM,
            "Enter the pathname_id of the page to report on",
            Some("e.g. 98"),
        );
        sink.set_date_range_required(true);
    }

    fn declare_fields(&self, sink: &mut dyn ConfigSchemaSink) {
        for field in self.catalog.list_fields() {
            sink.field(field.clone());
        }
    }

    fn get_data(&self, request: &DataRequest) -> Result<DataResponse, ConnectorError> {
        let fields = self.catalog.resolve(request.field_ids());
        for id in fields.unknown_ids() {
            warn!("Field '{id}' is not provided by this connector, emitting empty values");
        }

        let url = self.query_url(request)?;
        debug!("Page stats query: {url}");

        let body = self.fetcher.fetch(&url)?;
        let records = parse_rows(&body)?;
        let rows = project(&fields, &records);
        info!(
            "Returning {} rows with {} fields for {} to {}",
            rows.len(),
            fields.len(),
            request.date_range.start_date,
            request.date_range.end_date
        );

        Ok(DataResponse {
            schema: fields.schema(),
            rows,
        })
    }
}
