//! Logging with file output and size-based rotation.
//!
//! Writes to `~/.config/colosseum-waves/colosseum-waves.log` (or the platform
//! equivalent), rotating at 10 MB. Set `DEBUG_LOGGING=1` for debug output
//! from the colo crates.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use colo_core::context::APP_NAME;

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

fn filter_directive(debug_logging: bool) -> &'static str {
    if debug_logging {
        "info,colo_core=debug,colo_cli=debug"
    } else {
        "info"
    }
}

/// Initialize logging to the log file and stdout.
///
/// The returned guard flushes buffered file output when dropped and must be
/// held until the program exits. Returns `None` when the log file can't be
/// opened; logging then goes to stdout only.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let Some(log_dir) = dirs::config_dir().map(|config| config.join(APP_NAME)) else {
        init_stdout_only(debug_logging);
        return None;
    };

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        // Subscriber not installed yet
        eprintln!("Failed to create log directory {log_dir:?}: {e}, using stdout only");
        init_stdout_only(debug_logging);
        return None;
    }

    let log_path = log_dir.join(format!("{APP_NAME}.log"));
    let file_appender = match BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(MAX_LOG_SIZE),
        1,
    ) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to create log file at {log_path:?}: {e}");
            init_stdout_only(debug_logging);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive(debug_logging)))
        .init();

    tracing::info!(log_file = ?log_path, debug_logging, "Logging initialized");

    Some(guard)
}

fn init_stdout_only(debug_logging: bool) {
    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive(debug_logging)))
        .init();

    tracing::info!(debug_logging, "Logging initialized (stdout only)");
}
