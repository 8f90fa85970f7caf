use std::fmt;

use crate::{format::Formatter, transport::Transport};

pub const DEFAULT_ROOT: &str = "root";

/// Construction options for a [`LogRecorder`](crate::LogRecorder).
///
/// Unset `formatter`/`transport` fall back to [`JsonFormatter`](crate::JsonFormatter) and a
/// [`ColorTransport`](crate::ColorTransport) on stdout. An empty `root` falls back to
/// [`DEFAULT_ROOT`].
pub struct LoggerConfig {
    pub root: String,
    pub formatter: Option<Box<dyn Formatter>>,
    pub transport: Option<Box<dyn Transport>>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            formatter: None,
            transport: None,
        }
    }
}

impl LoggerConfig {
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Formatter + 'static,
    {
        self.formatter = Some(Box::new(formatter));
        self
    }

    pub fn with_transport<T>(mut self, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        self.transport = Some(Box::new(transport));
        self
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("root", &self.root)
            .field("formatter", &self.formatter.as_ref().map(|_| "custom"))
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .finish()
    }
}
