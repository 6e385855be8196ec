mod catalog;
mod cli;
mod config;
mod logging;
mod persistence;
mod query;
mod service;

use anyhow::Context;
use catalog_proto::racing::racing_server::RacingServer;
use catalog_proto::sports::sports_server::SportsServer;
use clap::Parser;
use persistence::sqlite::{Database, SeedPlan, SqliteRaceRepository, SqliteSportEventRepository};
use persistence::{RaceRepository, SportEventRepository};
use service::{RacingServiceImpl, SportsServiceImpl};
use std::sync::Arc;
use tonic::transport::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = cli::Cli::parse().into_settings()?;

    let _log_guard = logging::init(settings.log_dir.as_deref())?;

    tracing::info!("Starting catalog gRPC server");
    tracing::info!("Using database: {}", settings.database.display());

    let db = Database::open(&settings.database)
        .await
        .context("failed to open catalog database")?;

    let races = Arc::new(SqliteRaceRepository::new(
        db.pool().clone(),
        SeedPlan::from_count(settings.seed_count),
    ));
    let sports = Arc::new(SqliteSportEventRepository::new(
        db.pool().clone(),
        SeedPlan::from_count(settings.seed_count),
    ));

    // Neither service can answer anything without its table.
    races.init().await.context("failed to initialize races")?;
    sports.init().await.context("failed to initialize sport events")?;

    let addr = settings.grpc_endpoint;
    tracing::info!("Server listening on {}", addr);

    Server::builder()
        .timeout(settings.request_timeout)
        .add_service(RacingServer::new(RacingServiceImpl::new(races)))
        .add_service(SportsServer::new(SportsServiceImpl::new(sports)))
        .serve(addr)
        .await?;

    Ok(())
}
