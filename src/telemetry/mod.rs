//! Telemetry module
//!
//! Structured logging for the viewer

mod logging;

pub use logging::{init_logging, LogFormat};

use crate::config::TelemetryConfig;

/// Guard that cleans up telemetry on drop
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(config)?;

    tracing::debug!(
        level = %config.log_level,
        format = ?config.log_format,
        file = ?config.log_file,
        "Logging initialized"
    );

    Ok(TelemetryGuard { _priv: () })
}
