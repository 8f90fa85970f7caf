//! A small `log` crate facade that forwards `log` records into a [`LogRecorder`].
//!
//! Usage:
//! - Build a recorder (eg. `tintlog::init_recorder("app")`) and share it.
//! - Call `tintlog_log::init_with_max_level(recorder, log::LevelFilter::Info)` to install
//!   this facade as the global `log` implementation.

use std::sync::Arc;

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use tintlog::{LogLevel, LogRecorder};

pub type SharedRecorder = Arc<Mutex<LogRecorder>>;

/// Forwards each enabled `log` record to the recorder as a text payload.
pub struct RecorderLogger {
    recorder: SharedRecorder,
    max_level: LevelFilter,
}

impl RecorderLogger {
    pub fn new(recorder: SharedRecorder, max_level: LevelFilter) -> Self {
        Self {
            recorder,
            max_level,
        }
    }

    pub fn recorder(&self) -> &SharedRecorder {
        &self.recorder
    }
}

/// Installs a [`RecorderLogger`] as the global logger with the specified maximum level.
pub fn init_with_max_level(
    recorder: SharedRecorder,
    level: LevelFilter,
) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(RecorderLogger::new(recorder, level)))?;
    log::set_max_level(level);
    Ok(())
}

fn map_level(level: log::Level) -> LogLevel {
    use log::Level;
    match level {
        Level::Error => LogLevel::Error,
        Level::Warn => LogLevel::Warn,
        Level::Info => LogLevel::Info,
        Level::Debug => LogLevel::Debug,
        Level::Trace => LogLevel::Debug,
    }
}

impl Log for RecorderLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = map_level(record.level());
        let message = record.args().to_string();

        // Best-effort: ignore the result, `Log::log` cannot report it
        let _ = self
            .recorder
            .lock()
            .log(Some(message.into()), Some(level.label()));
    }

    // every line is written through before `log` returns
    fn flush(&self) {}
}
