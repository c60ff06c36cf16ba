mod config;
mod persistence;
mod service;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use catalog_proto::sports::sports_server::SportsServer;
use clap::Parser;
use persistence::sqlite::{Database, SqliteEventRepository};
use persistence::EventRepository;
use service::SportsServiceImpl;
use tonic::transport::Server;

/// gRPC server for sporting events.
#[derive(Parser)]
#[command(name = "sports-server", about = "Serves sporting events over gRPC")]
struct Cli {
    /// Address to listen on (defaults to SPORTS_GRPC_ENDPOINT or localhost:10000).
    #[arg(long)]
    grpc_endpoint: Option<String>,

    /// SQLite database file (defaults to SPORTS_DB_PATH or ./db/sports.db).
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

    tracing::info!("Starting sports gRPC server");
    tracing::info!("Using database: {}", db_path.display());

    let db = Database::open(&db_path)
        .await
        .with_context(|| format!("failed to open database {}", db_path.display()))?;

    // Seed before accepting traffic.
    let events = SqliteEventRepository::new(db.pool().clone());
    events.init().await.context("failed to seed events")?;

    let addr = tokio::net::lookup_host(&endpoint)
        .await
        .with_context(|| format!("failed to resolve {endpoint}"))?
        .next()
        .with_context(|| format!("no address for {endpoint}"))?;
    tracing::info!("gRPC server listening on {}", addr);

    Server::builder()
        .add_service(SportsServer::new(SportsServiceImpl::new(Arc::new(events))))
        .serve(addr)
        .await?;

    Ok(())
}
