use std::fmt::Write;

use chrono::Local;
use itertools::Itertools;
use serde_json::Value;

use super::Formatter;
use crate::{log_level::LogLevel, record::LogRecord};

const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Human readable single line: `<timestamp> <LEVEL> [<root>] <message> key=value ...`
#[derive(Debug, Clone)]
pub struct TextFormatter {
    timestamp_format: Option<String>,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            timestamp_format: Some(DEFAULT_TIMESTAMP_FORMAT.to_string()),
        }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    /// `strftime` style, see [`chrono::format::strftime`].
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }
}

impl Formatter for TextFormatter {
    fn format(&self, record: &LogRecord) -> Option<String> {
        let mut parts: Vec<String> = Vec::with_capacity(record.len() + 2);

        if let Some(timestamp_format) = &self.timestamp_format {
            // an invalid format string surfaces as a fmt::Error here rather than a panic
            let mut timestamp = String::new();
            write!(timestamp, "{}", Local::now().format(timestamp_format)).ok()?;
            parts.push(timestamp);
        }

        let level = match LogLevel::from_label(record.level()) {
            Some(level) => level.to_string(),
            None => record.level().to_uppercase(),
        };
        parts.push(level);

        if let Some(root) = record.root() {
            parts.push(format!("[{root}]"));
        }

        let message = record.message();
        if let Some(message) = message {
            parts.push(message.to_string());
        }

        let fields = record
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "root" | "level"))
            .filter(|(key, _)| message.is_none() || key.as_str() != "message")
            .map(|(key, value)| format!("{key}={}", render_value(value)))
            .join(" ");
        if !fields.is_empty() {
            parts.push(fields);
        }

        Some(parts.join(" "))
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) if is_bare(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_bare(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '=' || c == '"')
}
