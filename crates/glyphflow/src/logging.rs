//! File logging.
//!
//! The terminal belongs to the UI, so log lines go to `glyphflow.log` in the
//! platform state directory. The filter comes from `GLYPHFLOW_LOG`
//! (`warn` when unset).

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "glyphflow.log";
const FILTER_ENV: &str = "GLYPHFLOW_LOG";

/// Install the global subscriber. Returns the guard that flushes the log
/// writer on drop, or `None` if no log directory is usable.
pub fn init() -> Option<WorkerGuard> {
    let dir = glyphflow_config::log_dir()?;
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}
