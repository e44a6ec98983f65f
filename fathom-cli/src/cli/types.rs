use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::helper::DESCRIPTION;
use fathom_types::constants::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug)]
#[command(author, version, name = "fathom")]
#[command(about = DESCRIPTION, long_about = None)]
pub struct Cli {
    #[arg(
        global = true,
        short = 'c',
        long,
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config_path: String,
    /// Overrides `connection.base_url` from the config file.
    #[arg(global = true, long)]
    pub base_url: Option<String>,
    /// Overrides `connection.pathname_id` from the config file.
    #[arg(global = true, long)]
    pub pathname_id: Option<String>,

    #[clap(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Print the authentication type")]
    Auth,
    #[command(about = "Print the configuration inputs the connector declares")]
    Config(ShowConfig),
    #[command(about = "Print the fields the connector provides")]
    Schema(ShowSchema),
    #[command(about = "Fetch rows for a date range")]
    Data(DataArgs),
    #[command(about = "Print the query URL without fetching it")]
    Url(DataArgs),
}

#[derive(Debug, Args)]
pub struct ShowConfig {
    /// Show the resolved connection settings instead.
    #[arg(long)]
    pub connection: bool,
}

#[derive(Debug, Args)]
pub struct ShowSchema {
    #[arg(long)]
    pub table: bool,
}

#[derive(Debug, Args, Default)]
pub struct DataArgs {
    /// JSON file holding a full data request as the reporting platform sends it.
    #[arg(
        short = 'r',
        long,
        conflicts_with_all = ["start_date", "end_date", "fields"]
    )]
    pub request: Option<PathBuf>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
    /// Field ids in output order. Defaults to every field.
    #[arg(short = 'f', long = "field", value_delimiter = ',')]
    pub fields: Vec<String>,
}
