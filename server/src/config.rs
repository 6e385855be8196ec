//! Configuration for the catalog server
//!
//! Every value has a compile-time default and can be overridden by an
//! environment variable. Command-line flags (see [`crate::cli`]) take
//! precedence over both.

use std::path::PathBuf;

const DEV_DATA_DIR: &str = "./data";
const DATABASE_FILE: &str = "catalog.db";

/// Default gRPC listen address.
const DEFAULT_GRPC_ENDPOINT: &str = "[::1]:9000";

/// Default number of fake rows seeded into each table.
pub const DEFAULT_SEED_COUNT: u32 = 100;

/// Default per-request deadline enforced by the transport (in seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Get the data directory holding the SQLite file.
///
/// Priority:
/// 1. CATALOG_DATA_DIR env variable if set
/// 2. The platform data directory for "catalog"
/// 3. ./data as fallback
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CATALOG_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "catalog") {
        return dirs.data_dir().to_path_buf();
    }

    PathBuf::from(DEV_DATA_DIR)
}

/// Path of the SQLite database file inside the data directory.
pub fn get_database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE)
}

/// Get the gRPC listen address.
///
/// Priority:
/// 1. `CATALOG_GRPC_ENDPOINT` env variable if set
/// 2. `[::1]:9000` as fallback
pub fn get_grpc_endpoint() -> String {
    std::env::var("CATALOG_GRPC_ENDPOINT").unwrap_or_else(|_| DEFAULT_GRPC_ENDPOINT.to_string())
}

/// Get the number of fake rows to seed per table.
///
/// Falls back to the default when `CATALOG_SEED_COUNT` is unset or not a `u32`.
pub fn get_seed_count() -> u32 {
    if let Ok(count) = std::env::var("CATALOG_SEED_COUNT") {
        return count.parse().unwrap_or(DEFAULT_SEED_COUNT);
    }

    DEFAULT_SEED_COUNT
}

/// Get the request timeout in seconds.
///
/// Falls back to the default when `CATALOG_REQUEST_TIMEOUT_SECS` is unset or
/// cannot be parsed as a `u64`.
pub fn get_request_timeout_secs() -> u64 {
    if let Ok(timeout) = std::env::var("CATALOG_REQUEST_TIMEOUT_SECS") {
        return timeout.parse().unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Directory for rolling log files. `None` logs to stdout.
pub fn get_log_dir() -> Option<PathBuf> {
    std::env::var("CATALOG_LOG_DIR").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_data_dir_not_empty() {
        // Either the env var, the platform dir or ./data
        let dir = get_data_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn test_database_path_is_inside_data_dir() {
        let path = get_database_path();
        assert!(path.ends_with(DATABASE_FILE));
        assert_eq!(path.parent(), Some(get_data_dir().as_path()));
    }

    #[test]
    fn test_grpc_endpoint_parses_as_socket_addr() {
        if std::env::var("CATALOG_GRPC_ENDPOINT").is_err() {
            let addr: std::net::SocketAddr = get_grpc_endpoint().parse().unwrap();
            assert_eq!(addr.port(), 9000);
        }
    }

    #[test]
    fn test_seed_count_default() {
        if std::env::var("CATALOG_SEED_COUNT").is_err() {
            assert_eq!(get_seed_count(), DEFAULT_SEED_COUNT);
        }
    }
}
