use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{config::Config, open_store, run, shutdown_signal, telemetry, AppState};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    telemetry::init();

    tracing::info!(
        bind_address = %config.bind_address(),
        store = ?config.store,
        database = %config.database,
        "Configuration loaded"
    );

    let store = match open_store(&config).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %err, "could not connect to the todo store");
            return ExitCode::FAILURE;
        }
    };

    let listener = match TcpListener::bind(config.bind_address()).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, address = %config.bind_address(), "could not bind");
            return ExitCode::FAILURE;
        }
    };

    match run(listener, AppState::new(store), shutdown_signal()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server error");
            ExitCode::FAILURE
        }
    }
}
