//! Simswap Mock CLI
//!
//! Command-line interface for the SIM swap mock backend. This binary
//! serves the mock retrieve-date lookup over HTTP so an API gateway
//! (or a curl) can exercise the sim-swap flow without a real backend.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod server;

/// Simswap Mock - mock backend for the SIM swap retrieve-date lookup
///
/// Answers every retrieve-date request with a JSON payload holding
/// either the current UTC instant or a fixed historical timestamp.
#[derive(Parser, Debug)]
#[command(name = "simswap-mock")]
#[command(version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    tracing::info!("Starting simswap mock backend on port {}", args.port);

    match server::run_server(args.port).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
