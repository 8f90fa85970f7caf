//! A small structured-logging helper.
//!
//! A [`LogRecorder`] merges a payload (text or a mapping of fields) with its root tag and a
//! severity label, formats the resulting [`LogRecord`] and hands the text to a
//! [`Transport`]. By default that is compact JSON, wrapped in an ANSI color picked from the
//! severity and written as one line to stdout.
//!
//! ```no_run
//! use serde_json::json;
//! use tintlog::{LogRecorder, LoggerConfig};
//!
//! let mut recorder = LogRecorder::new(LoggerConfig::default().with_root("svc"));
//! recorder.log(Some(json!("boot ok")), Some("info"))?;
//! recorder.warn(json!({ "disk": "sda1", "free_pct": 4 }))?;
//! # Ok::<(), tintlog::LoggerError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod log_level;
pub mod record;
pub mod recorder;
pub mod transport;

#[cfg(test)]
mod tests;

pub use config::LoggerConfig;
pub use error::LoggerError;
pub use format::{Formatter, JsonFormatter};
pub use log_level::LogLevel;
pub use record::LogRecord;
pub use recorder::LogRecorder;
pub use transport::{CaptureWriter, ColorTransport, LineWriter, StdoutWriter, Transport};

#[cfg(feature = "text")]
pub use format::TextFormatter;

#[cfg(feature = "tracing-sink")]
pub use transport::TracingTransport;

pub type Result<T, E = LoggerError> = std::result::Result<T, E>;

/// Builds a recorder with the default formatter and stdout transport under `root`.
pub fn init_recorder(root: impl Into<String>) -> LogRecorder {
    LogRecorder::new(LoggerConfig::default().with_root(root))
}
