use crate::{CaptureWriter, ColorTransport, LogRecorder, LoggerConfig};

mod recorder;

/// A recorder whose default color transport writes into memory instead of stdout.
fn capture_recorder(config: LoggerConfig) -> (LogRecorder, CaptureWriter) {
    let writer = CaptureWriter::new();
    let recorder = LogRecorder::new(config.with_transport(ColorTransport::new(writer.clone())));

    (recorder, writer)
}

fn green(text: &str) -> String {
    format!("\u{1b}[32m{text}\u{1b}[39m")
}
