mod config;
mod persistence;
mod service;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use catalog_proto::racing::racing_server::RacingServer;
use clap::Parser;
use persistence::sqlite::{Database, SqliteRaceRepository};
use persistence::RaceRepository;
use service::RacingServiceImpl;
use tonic::transport::Server;

/// gRPC server for the race catalog.
#[derive(Parser)]
#[command(name = "racing-server", about = "Serves the race catalog over gRPC")]
struct Cli {
    /// Address to listen on (defaults to RACING_GRPC_ENDPOINT or localhost:9000).
    #[arg(long)]
    grpc_endpoint: Option<String>,

    /// SQLite database file (defaults to RACING_DB_PATH or ./db/racing.db).
    #[arg(long)]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with span durations
    use tracing_subscriber::fmt::format::FmtSpan;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let cli = Cli::parse();
    let endpoint = cli.grpc_endpoint.unwrap_or_else(config::get_grpc_endpoint);
    let db_path = cli.database.unwrap_or_else(config::get_db_path);

    tracing::info!("Starting racing gRPC server");
    tracing::info!("Using database: {}", db_path.display());

    let db = Database::open(&db_path)
        .await
        .with_context(|| format!("failed to open database {}", db_path.display()))?;

    // Seed before accepting traffic.
    let races = SqliteRaceRepository::new(db.pool().clone());
    races.init().await.context("failed to seed races")?;

    let addr = tokio::net::lookup_host(&endpoint)
        .await
        .with_context(|| format!("failed to resolve {endpoint}"))?
        .next()
        .with_context(|| format!("no address for {endpoint}"))?;
    tracing::info!("gRPC server listening on {}", addr);

    Server::builder()
        .add_service(RacingServer::new(RacingServiceImpl::new(Arc::new(races))))
        .serve(addr)
        .await?;

    Ok(())
}
