//! src/logging.rs
//!
//! Tracing setup. The terminal belongs to the UI, so events only go to a
//! daily rolling file under the configured log directory. `RUST_LOG`
//! overrides the default `info` filter.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Keeps the background log writer alive; drop it last.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber. Logging is silently disabled when the log
/// directory cannot be created, since there is nowhere else to report it.
pub fn init(log_dir: &Path) -> LoggingGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(err) = std::fs::create_dir_all(log_dir) {
        tracing_subscriber::registry().with(filter).try_init().ok();
        tracing::warn!(dir = %log_dir.display(), %err, "file logging disabled");
        return LoggingGuard { _file_guard: None };
    }

    let appender = tracing_appender::rolling::daily(log_dir, "launcher.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .with_ansi(false)
        .compact()
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok();

    LoggingGuard {
        _file_guard: Some(guard),
    }
}
