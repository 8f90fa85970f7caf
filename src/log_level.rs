use std::fmt::Display;

/// The severity labels the recorder knows a color for.
///
/// Labels stay free-form text at the recorder's surface; anything not listed here is
/// treated as [`LogLevel::Info`] when it comes to picking a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Debug,
    ];

    /// The label written into the `level` field of a record.
    pub const fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warning",
            LogLevel::Error => "error",
            LogLevel::Debug => "debug",
        }
    }

    /// Exact, case-sensitive match. `"warn"` is not `"warning"`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }

    /// Resolves an optional label, falling back to info for absent or unknown labels.
    pub fn resolve(label: Option<&str>) -> Self {
        label.and_then(Self::from_label).unwrap_or_default()
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Debug => write!(f, "DEBUG"),
        }
    }
}
