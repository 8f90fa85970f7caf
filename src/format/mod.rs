use crate::record::LogRecord;

mod json_formatter;
#[cfg(feature = "text")]
mod text_formatter;

pub use json_formatter::JsonFormatter;
#[cfg(feature = "text")]
pub use text_formatter::TextFormatter;

/// Turns a record into the text handed to the transport.
///
/// `None` means the record could not be represented. The recorder skips the transport for
/// that call instead of failing.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> Option<String>;
}

impl<F> Formatter for F
where
    F: Fn(&LogRecord) -> Option<String> + Send + Sync,
{
    fn format(&self, record: &LogRecord) -> Option<String> {
        self(record)
    }
}
