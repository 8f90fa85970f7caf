use crate::log_level::LogLevel;

/// Foreground colors used for severities, with their SGR codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

/// Resets the foreground only, leaving any other attributes alone.
pub const FG_RESET: &str = "\x1b[39m";

impl Color {
    pub const fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }

    pub const fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Color::Red,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Debug => Color::Blue,
            LogLevel::Info => Color::Green,
        }
    }

    /// Unknown and absent labels are green.
    pub fn for_label(label: Option<&str>) -> Self {
        Self::for_level(LogLevel::resolve(label))
    }

    pub fn paint(self, text: &str) -> String {
        format!("\x1b[{}m{text}{FG_RESET}", self.code())
    }
}
