use crate::error::SetupError;
use std::fs;
use std::path::Path;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_FILE_PREFIX: &str = "lazypm.log";
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber writing to a daily rolling file in `dir`.
///
/// The returned guard flushes pending entries when dropped, so `main` keeps
/// it alive for the whole run.
pub fn setup_logger(dir: &Path, filter: &str) -> Result<WorkerGuard, SetupError> {
    fs::create_dir_all(dir).map_err(|source| SetupError::Logging {
        path: dir.display().to_string(),
        source,
    })?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let (env_filter, rejected) = match EnvFilter::try_new(filter) {
        Ok(f) => (f, None),
        Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
    };
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_line_number(true)
        .with_writer(writer)
        .with_filter(env_filter);

    // a second init (tests, embedding) keeps the first subscriber
    tracing_subscriber::registry().with(file_layer).try_init().ok();

    if let Some(e) = rejected {
        warn!(filter, error = %e, "invalid log filter, using `{DEFAULT_FILTER}`");
    }

    Ok(guard)
}
