use clap::Parser;
use fathom_cli::cli::types::Cli;
use fathom_cli::cli::{execute, load_config};
use fathom_cli::errors::CliError;
use fathom_tracing::init_telemetry;
use fathom_types::tracing::error;
use std::process;

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = match load_config(&cli.config_path) {
        Ok(config) => config,
        Err(e) => {
            init_telemetry(None, None);
            return Err(e);
        }
    };
    init_telemetry(Some(&config.app_name), config.telemetry.clone());

    let stdout = std::io::stdout();
    execute(cli, &config, &mut stdout.lock())
}
