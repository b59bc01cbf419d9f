use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::AppSettings;

const LOG_FILE_PREFIX: &str = "mc-status.log";

/// Console on stderr plus a daily file; `RUST_LOG` overrides the configured filter.
pub fn init_logging(settings: &AppSettings) -> WorkerGuard {
    let log_dir = get_log_directory();

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|e| {
            eprintln!("Warning: Invalid log filter {:?}: {}", settings.log_filter, e);
            EnvFilter::new("info")
        })
    });

    // rendered views go to stdout, so keep the console log off it
    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(file_writer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        "mc-status {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );

    let removed = cleanup_old_logs(&log_dir, settings.log_retention());
    if removed > 0 {
        tracing::debug!("Removed {} expired log files", removed);
    }

    guard
}

fn get_log_directory() -> PathBuf {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mc-status")
        .join("logs");

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    log_dir
}

/// Rotated files look like `mc-status.log.2024-05-01`; the bare prefix is never one
fn is_rotated_log(name: &str) -> bool {
    name.strip_prefix(LOG_FILE_PREFIX)
        .is_some_and(|suffix| suffix.starts_with('.') && suffix.len() > 1)
}

/// Delete rotated logs not modified within `retention`. Returns how many went.
fn cleanup_old_logs(log_dir: &Path, retention: Duration) -> usize {
    let Some(cutoff) = SystemTime::now().checked_sub(retention) else {
        return 0;
    };

    let entries = match std::fs::read_dir(log_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to read log directory for cleanup: {}", e);
            return 0;
        }
    };

    entries
        .flatten()
        .filter(|entry| entry.file_name().to_str().is_some_and(is_rotated_log))
        .filter(|entry| {
            entry
                .metadata()
                .and_then(|m| m.modified())
                .is_ok_and(|modified| modified < cutoff)
        })
        .filter(|entry| match std::fs::remove_file(entry.path()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to remove old log file {:?}: {}", entry.path(), e);
                false
            }
        })
        .count()
}
