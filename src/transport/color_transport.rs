use super::{Color, LineWriter, StdoutWriter, Transport};
use crate::Result;

/// Wraps each message in the color of its severity and writes it as one line.
#[derive(Debug, Clone, Default)]
pub struct ColorTransport<W = StdoutWriter> {
    writer: W,
}

impl ColorTransport<StdoutWriter> {
    pub fn stdout() -> Self {
        Self::default()
    }
}

impl<W: LineWriter> ColorTransport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: LineWriter> Transport for ColorTransport<W> {
    fn transport(&self, level: Option<&str>, message: &str) -> Result<()> {
        let line = Color::for_label(level).paint(message);
        self.writer.write_line(&line)?;
        Ok(())
    }
}
