//! Workboard server entry point.

use clap::Parser;
use log::error;
use std::process::ExitCode;
use workboard_core::{flush_logging, init_logging};
use workboard_server::{prepare_database, serve, ServerConfig, StartupError};

fn main() -> ExitCode {
    let config = ServerConfig::parse();

    if let Err(err) = init_logging(config.log_level(), config.log_dir.as_deref()) {
        eprintln!("Cannot initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=startup module=server status=error error={err}");
            flush_logging();
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ServerConfig) -> Result<(), StartupError> {
    // Seed before the runtime exists so no request can observe a partial load.
    let database = prepare_database(config)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(StartupError::Runtime)?
        .block_on(serve(config, database))
}
