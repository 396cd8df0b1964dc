//! Process-wide logging installed from the validated `[logging]` policy.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use athena_executor_core::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Map a configured level name to a filter directive.
///
/// Returns `None` for names we do not recognise.
pub fn level_directive(level: &str) -> Option<&'static str> {
    match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Some("trace"),
        "DEBUG" => Some("debug"),
        "INFO" => Some("info"),
        "WARN" | "WARNING" => Some("warn"),
        "ERROR" => Some("error"),
        "OFF" => Some("off"),
        _ => None,
    }
}

/// Split a log file path into its directory and file name, creating the
/// directory when it does not exist yet.
pub fn prepare_log_file(log_file: &str) -> std::io::Result<(PathBuf, OsString)> {
    let path = Path::new(log_file);
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("log_file has no file name: {log_file}"),
            )
        })?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;
    Ok((dir, file_name))
}

/// Open `log_file` for appending, creating its directory first.
///
/// Fails instead of panicking when the path cannot be opened as a file.
pub fn open_log_file(log_file: &str) -> anyhow::Result<RollingFileAppender> {
    let (dir, file_name) = prepare_log_file(log_file)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)?;
    Ok(appender)
}

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the configured level. When file logging is on, the
/// returned guard must be held until the process is done logging.
pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let directive = level_directive(&config.level);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive.unwrap_or("info")));

    let mut file_error = None;
    let (file_layer, guard) = if config.file_logging {
        match open_log_file(&config.log_file) {
            Ok(appender) => {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer().with_ansi(false).with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                file_error = Some(e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .try_init()?;

    if directive.is_none() {
        tracing::warn!(level = %config.level, "Unknown log level, using INFO");
    }
    if let Some(e) = file_error {
        tracing::warn!(
            log_file = %config.log_file,
            error = %e,
            "Cannot open log file, file logging disabled"
        );
    }

    tracing::info!(
        level = %config.level,
        file_logging = config.file_logging && guard.is_some(),
        log_file = %config.log_file,
        "Logging configured"
    );

    Ok(guard)
}
