use super::types::{Cli, Commands, DataArgs, ShowConfig, ShowSchema};
use crate::errors::CliError;
use fathom_connector::{Connector, DatasetteConnector, FieldCatalog, KnownField, ReqwestFetcher};
use fathom_types::constants::DEFAULT_CONFIG_PATH;
use fathom_types::errors::config::ConfigError;
use fathom_types::host_types::{ConfigParams, DataRequest, DateRange, RequestedField};
use fathom_types::models::config::AppConfig;
use fathom_types::models::connection::DatasetteConfig;
use fathom_types::prettytable::{row, Table};
use fathom_types::serde::Serialize;
use fathom_types::serde_json;
use fathom_types::tracing::debug;
use fathom_types::types::Schema;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

pub const DESCRIPTION: &str =
    "Serves Fathom page stats from a Datasette instance as a reporting data feed.";

/// A missing file at the default path means "no config file".
pub fn load_config(config_path: &str) -> Result<AppConfig, CliError> {
    let path = Path::new(config_path);
    if config_path == DEFAULT_CONFIG_PATH && !path.exists() {
        debug!("No {DEFAULT_CONFIG_PATH} found, using defaults");
        return Ok(AppConfig::default());
    }
    Ok(AppConfig::load(path)?)
}

fn cli_overrides(cli: &Cli) -> DatasetteConfig {
    DatasetteConfig {
        base_url: cli.base_url.clone(),
        pathname_id: cli.pathname_id.clone(),
        timeout_secs: None,
    }
}

/// Command line flags take precedence over the config file.
pub fn resolve_connection(cli: &Cli, config: &AppConfig) -> DatasetteConfig {
    let overrides = cli_overrides(cli);
    DatasetteConfig {
        base_url: overrides.base_url.or_else(|| config.connection.base_url.clone()),
        pathname_id: overrides
            .pathname_id
            .or_else(|| config.connection.pathname_id.clone()),
        timeout_secs: config.connection.timeout_secs,
    }
}

/// Builds the request from a request file or from flags. Values in a request
/// file win over the config file; explicit flags win over both.
pub fn build_data_request(
    args: &DataArgs,
    config: &DatasetteConfig,
    overrides: &DatasetteConfig,
) -> Result<DataRequest, CliError> {
    let mut request = match &args.request {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| CliError::CannotReadRequest(path.clone(), e))?;
            DataRequest::from_json_str(&json)?
        }
        None => {
            let start_date = args
                .start_date
                .clone()
                .ok_or(ConfigError::MissingField("start_date"))?;
            let end_date = args
                .end_date
                .clone()
                .ok_or(ConfigError::MissingField("end_date"))?;
            let fields = if args.fields.is_empty() {
                FieldCatalog::global()
                    .list_fields()
                    .iter()
                    .map(|field| RequestedField::new(field.name.clone()))
                    .collect()
            } else {
                args.fields.iter().map(RequestedField::new).collect()
            };
            DataRequest {
                config_params: ConfigParams::default(),
                date_range: DateRange::new(start_date, end_date),
                fields,
            }
        }
    };

    let params = &mut request.config_params;
    if let Some(base_url) = &overrides.base_url {
        params.base_url = base_url.clone();
    } else if params.base_url.is_empty() {
        params.base_url = config.base_url.clone().unwrap_or_default();
    }
    if overrides.pathname_id.is_some() {
        params.pathname_id = overrides.pathname_id.clone();
    } else if params.pathname_id.is_none() {
        params.pathname_id = config.pathname_id.clone();
    }
    Ok(request)
}

pub fn execute(cli: Cli, config: &AppConfig, out: &mut dyn Write) -> Result<(), CliError> {
    let connection = resolve_connection(&cli, config);
    let overrides = cli_overrides(&cli);
    let fetcher = ReqwestFetcher::new(connection.timeout_secs.map(Duration::from_secs))?;
    let connector = DatasetteConnector::new(fetcher);

    match cli.cmd {
        Commands::Auth => write_json(out, &connector.auth_type()),
        Commands::Config(ShowConfig { connection: true }) => {
            connection.convert_to_table().print(out)?;
            Ok(())
        }
        Commands::Config(ShowConfig { connection: false }) => {
            write_json(out, &connector.get_config())
        }
        Commands::Schema(ShowSchema { table: true }) => {
            schema_table(&connector.get_schema().schema).print(out)?;
            Ok(())
        }
        Commands::Schema(ShowSchema { table: false }) => {
            write_json(out, &connector.get_schema())
        }
        Commands::Data(args) => {
            let request = build_data_request(&args, &config.connection, &overrides)?;
            write_json(out, &connector.get_data(&request)?)
        }
        Commands::Url(args) => {
            let request = build_data_request(&args, &config.connection, &overrides)?;
            writeln!(out, "{}", connector.query_url(&request)?)?;
            Ok(())
        }
    }
}

fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(CliError::Serialize)?;
    writeln!(out)?;
    Ok(())
}

fn schema_table(schema: &Schema) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Field", "Type", "Concept", "Source column"]);
    for field in &schema.fields {
        let source = KnownField::from_id(&field.name).map_or("", KnownField::source_column);
        table.add_row(row![
            field.name,
            field.typ,
            field.semantics.concept_type,
            source
        ]);
    }
    table
}
