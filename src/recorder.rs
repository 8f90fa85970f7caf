use std::fmt;

use serde_json::Value;

use crate::{
    config::{LoggerConfig, DEFAULT_ROOT},
    format::{Formatter, JsonFormatter},
    log_level::LogLevel,
    record::LogRecord,
    transport::{ColorTransport, Transport},
    LoggerError, Result,
};

pub struct LogRecorder {
    root: String,
    formatter: Box<dyn Formatter>,
    transport: Box<dyn Transport>,

    /// Level of the current (or last) call
    level: Option<String>,
    /// Payload of the current (or last) call
    payload: Option<Value>,
}

impl LogRecorder {
    pub fn new(config: LoggerConfig) -> Self {
        let root = if config.root.is_empty() {
            DEFAULT_ROOT.to_string()
        } else {
            config.root
        };

        Self {
            root,
            formatter: config
                .formatter
                .unwrap_or_else(|| Box::new(JsonFormatter)),
            transport: config
                .transport
                .unwrap_or_else(|| Box::new(ColorTransport::stdout())),
            level: None,
            payload: None,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Records `payload` at `level` and writes it out through the transport.
    ///
    /// Fails with [`LoggerError::MissingArgument`] when there is no payload, and with
    /// [`LoggerError::InvalidPayloadType`] when the payload is neither a string nor an
    /// object. Both abort before anything is written.
    pub fn log(&mut self, payload: Option<Value>, level: Option<&str>) -> Result<()> {
        let payload = payload.ok_or(LoggerError::MissingArgument)?;

        self.level = level.map(str::to_string);
        self.payload = Some(payload);

        let record = self.build_record()?;
        let Some(message) = self.format(&record) else {
            tracing::warn!(
                root = %self.root,
                level = record.level(),
                "formatter produced no output, record dropped"
            );
            return Ok(());
        };

        tracing::trace!(root = %self.root, level = record.level(), "dispatching record");
        self.transport(level, &message)
    }

    /// Builds the record for the current call state.
    pub fn build_record(&self) -> Result<LogRecord> {
        let payload = self.payload.as_ref().ok_or(LoggerError::MissingArgument)?;

        LogRecord::build(&self.root, payload, self.level.as_deref())
    }

    pub fn format(&self, record: &LogRecord) -> Option<String> {
        self.formatter.format(record)
    }

    pub fn transport(&self, level: Option<&str>, message: &str) -> Result<()> {
        self.transport.transport(level, message)
    }

    pub fn info(&mut self, payload: impl Into<Value>) -> Result<()> {
        self.log_at(LogLevel::Info, payload)
    }

    pub fn warn(&mut self, payload: impl Into<Value>) -> Result<()> {
        self.log_at(LogLevel::Warn, payload)
    }

    pub fn error(&mut self, payload: impl Into<Value>) -> Result<()> {
        self.log_at(LogLevel::Error, payload)
    }

    pub fn debug(&mut self, payload: impl Into<Value>) -> Result<()> {
        self.log_at(LogLevel::Debug, payload)
    }

    fn log_at(&mut self, level: LogLevel, payload: impl Into<Value>) -> Result<()> {
        self.log(Some(payload.into()), Some(level.label()))
    }
}

impl Default for LogRecorder {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for LogRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecorder")
            .field("root", &self.root)
            .field("level", &self.level)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}
