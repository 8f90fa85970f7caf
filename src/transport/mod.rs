use crate::Result;

mod color;
mod color_transport;
mod line_writer;
#[cfg(feature = "tracing-sink")]
mod tracing_transport;

pub use color::Color;
pub use color_transport::ColorTransport;
pub use line_writer::{CaptureWriter, LineWriter, StdoutWriter};
#[cfg(feature = "tracing-sink")]
pub use tracing_transport::TracingTransport;

/// Performs the final output of a formatted record.
///
/// `level` is the label the caller passed to `log`, untouched by the record's `info`
/// default.
pub trait Transport: Send + Sync {
    fn transport(&self, level: Option<&str>, message: &str) -> Result<()>;
}

impl<F> Transport for F
where
    F: Fn(Option<&str>, &str) -> Result<()> + Send + Sync,
{
    fn transport(&self, level: Option<&str>, message: &str) -> Result<()> {
        self(level, message)
    }
}
