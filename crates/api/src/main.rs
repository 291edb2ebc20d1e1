//! FuelEU compliance API - Main entry point

use clap::Parser;
use fueleu_api::{create_router, AppState};
use fueleu_catalog::{sample_fleet, RouteCatalog};

#[derive(Parser)]
#[command(name = "fueleu-api")]
#[command(about = "FuelEU maritime compliance service", long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let catalog = RouteCatalog::new(sample_fleet())?;
    let app = create_router(AppState::new(catalog));

    let addr = format!("{}:{}", cli.host, cli.port);
    tracing::info!("compliance API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
