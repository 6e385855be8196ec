//! Tracing subscriber setup.

use anyhow::Context;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Create the log directory if it does not exist yet.
pub fn ensure_log_dir(log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))
}

/// Install the global subscriber with span durations.
///
/// With a `log_dir`, output goes to daily rolling files there and the
/// returned guard must be held until shutdown to flush them.
pub fn init(log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_dir {
        Some(log_dir) => {
            ensure_log_dir(log_dir)?;
            let file_appender = tracing_appender::rolling::daily(log_dir, "catalog-server");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(non_blocking)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_span_events(FmtSpan::CLOSE)
                .init();
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_log_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs").join("catalog");
        ensure_log_dir(&log_dir).unwrap();
        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_ensure_log_dir_reports_blocked_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, b"").unwrap();

        let err = ensure_log_dir(&file.join("logs")).unwrap_err();
        assert!(err.to_string().contains("failed to create log directory"));
    }
}
