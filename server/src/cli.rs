//! Command-line flags for the catalog server.
//!
//! Each flag overrides the matching value from [`crate::config`].

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::config;

/// Read-only gRPC catalog of races and sport events.
#[derive(Parser, Debug)]
#[command(name = "catalog-server", about = "Read-only gRPC catalog of races and sport events")]
pub struct Cli {
    /// gRPC listen address, e.g. `[::1]:9000`.
    #[arg(long)]
    pub grpc_endpoint: Option<String>,

    /// SQLite database file. Created if missing.
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Number of fake rows seeded into each table on first start. Zero
    /// creates the tables empty.
    #[arg(long)]
    pub seed_count: Option<u32>,

    /// Per-request deadline enforced by the server.
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Write logs to daily rolling files in this directory instead of stdout.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub grpc_endpoint: SocketAddr,
    pub database: PathBuf,
    pub seed_count: u32,
    pub request_timeout: Duration,
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Merge flags over environment/default configuration.
    pub fn into_settings(self) -> anyhow::Result<Settings> {
        let endpoint = self.grpc_endpoint.unwrap_or_else(config::get_grpc_endpoint);
        let grpc_endpoint = endpoint
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid gRPC endpoint {endpoint:?}: {e}"))?;

        Ok(Settings {
            grpc_endpoint,
            database: self.database.unwrap_or_else(config::get_database_path),
            seed_count: self.seed_count.unwrap_or_else(config::get_seed_count),
            request_timeout: Duration::from_secs(
                self.request_timeout_secs
                    .unwrap_or_else(config::get_request_timeout_secs),
            ),
            log_dir: self.log_dir.or_else(config::get_log_dir),
        })
    }
}
