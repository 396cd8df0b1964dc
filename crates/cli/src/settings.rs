//! Applying a validated configuration to the running process.

use athena_executor_core::{Configuration, SslConfig};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use crate::logging;

/// Install logging and report the TLS policy. Called once, after the
/// configuration has been validated and before any connection is opened.
pub fn apply(config: &Configuration) -> anyhow::Result<Option<WorkerGuard>> {
    let guard = logging::init(config.logging())?;
    apply_ssl(config.ssl());
    info!("Configuration applied");
    Ok(guard)
}

fn apply_ssl(ssl: &SslConfig) {
    if ssl.disable_cert_checking {
        warn!("SSL certificate verification disabled in configuration: SECURITY RISK");
    } else {
        info!("SSL certificate verification enabled");
    }
}
