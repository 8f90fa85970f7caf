use tracing::{debug, error, info, warn};

use super::Transport;
use crate::{log_level::LogLevel, Result};

/// Forwards formatted lines to the active `tracing` subscriber instead of stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTransport;

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl Transport for TracingTransport {
    fn transport(&self, level: Option<&str>, message: &str) -> Result<()> {
        match LogLevel::resolve(level) {
            LogLevel::Info => info!(target: "tintlog", "{message}"),
            LogLevel::Warn => warn!(target: "tintlog", "{message}"),
            LogLevel::Error => error!(target: "tintlog", "{message}"),
            LogLevel::Debug => debug!(target: "tintlog", "{message}"),
        }

        Ok(())
    }
}
