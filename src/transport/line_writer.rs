use std::{
    io::{self, Write},
    sync::Arc,
};

use parking_lot::Mutex;

/// The single primitive every line of output goes through.
pub trait LineWriter: Send + Sync {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

impl<F> LineWriter for F
where
    F: Fn(&str) -> io::Result<()> + Send + Sync,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        self(line)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter;

impl LineWriter for StdoutWriter {
    fn write_line(&self, line: &str) -> io::Result<()> {
        // hold the lock so the line and its terminator are not interleaved
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }
}

/// Keeps written lines in memory. Clones share the same buffer, so one handle can be given
/// to a transport while another observes it.
#[derive(Debug, Clone, Default)]
pub struct CaptureWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drains the buffer.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl LineWriter for CaptureWriter {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}
