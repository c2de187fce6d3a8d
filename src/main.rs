mod config;
mod error;
mod handlers;
mod logger;
mod models;
mod server;

use clap::Parser;
use config::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {

    let cli = Cli::parse();

    logger::init_logger();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            // RUST_LOG may filter the line above; a fatal error is always printed
            eprintln!("block_service: {e}");
            ExitCode::FAILURE
        }
    }

}

async fn run(cli: Cli) -> error::Result<()> {

    let shutdown = server::shutdown_signal();

    let addr = cli.listen_addr();
    let listener = server::bind(addr).await?;
    tracing::info!("block service listening on {}", addr);

    server::serve(listener, shutdown).await?;
    tracing::info!("block service stopped");

    Ok(())

}
