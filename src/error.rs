use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("LogRecorder::log: a payload must be provided")]
    MissingArgument,

    #[error("LogRecorder::build_record: payload must be text or a mapping, found {found}")]
    InvalidPayloadType { found: &'static str },

    #[error("Unable to write log line: {0}")]
    Io(#[from] std::io::Error),
}
