use super::Formatter;
use crate::record::LogRecord;

/// Compact JSON, keys in insertion order, no whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Option<String> {
        serde_json::to_string(record)
            .inspect_err(|e| tracing::debug!("JsonFormatter: unable to serialize record: {e}"))
            .ok()
    }
}
