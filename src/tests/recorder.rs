use std::sync::Arc;

use color_eyre::eyre::Result;
use parking_lot::Mutex;
use serde_json::json;
use tracing_test::traced_test;

use super::{capture_recorder, green};
use crate::{record::LogRecord, LogRecorder, LoggerConfig, LoggerError};

#[test]
fn test_default_root() {
    let recorder = LogRecorder::default();

    assert_eq!(recorder.root(), "root");
    assert_eq!(recorder.level(), None);
    assert!(recorder.payload().is_none());
}

#[test]
fn test_custom_root() {
    let recorder = LogRecorder::new(LoggerConfig::default().with_root("custom root"));
    assert_eq!(recorder.root(), "custom root");

    let recorder = LogRecorder::new(LoggerConfig::default().with_root(""));
    assert_eq!(recorder.root(), "root");
}

#[test]
fn test_boot_scenario() -> Result<()> {
    let (mut recorder, writer) = capture_recorder(LoggerConfig::default().with_root("svc"));

    recorder.log(Some(json!("boot ok")), Some("info"))?;

    assert_eq!(
        writer.lines(),
        [green(r#"{"root":"svc","message":"boot ok","level":"info"}"#)]
    );
    Ok(())
}

#[test]
fn test_missing_payload() {
    let (mut recorder, writer) = capture_recorder(LoggerConfig::default());

    let err = recorder.log(None, Some("error")).unwrap_err();

    assert!(matches!(err, LoggerError::MissingArgument));
    assert!(writer.is_empty());
    assert_eq!(recorder.level(), None);
}

#[test]
fn test_log_sets_call_state() -> Result<()> {
    let (mut recorder, _writer) = capture_recorder(LoggerConfig::default());

    recorder.log(Some(json!("data")), Some("level"))?;

    assert_eq!(recorder.level(), Some("level"));
    assert_eq!(recorder.payload(), Some(&json!("data")));

    let record = recorder.build_record()?;
    assert_eq!(record.message(), Some("data"));
    assert_eq!(record.level(), "level");
    Ok(())
}

#[test]
fn test_build_record_before_log() {
    let recorder = LogRecorder::default();

    assert!(matches!(
        recorder.build_record(),
        Err(LoggerError::MissingArgument)
    ));
}

#[test]
fn test_invalid_payload_writes_nothing() {
    let (mut recorder, writer) = capture_recorder(LoggerConfig::default());

    let err = recorder.log(Some(json!(1)), Some("info")).unwrap_err();

    assert!(matches!(
        err,
        LoggerError::InvalidPayloadType { found: "number" }
    ));
    assert!(writer.is_empty());
}

#[test]
fn test_mapping_payload_output() -> Result<()> {
    let (mut recorder, writer) = capture_recorder(LoggerConfig::default());

    recorder.log(Some(json!({ "a": 1, "b": 2 })), None)?;

    assert_eq!(
        writer.last().as_deref(),
        Some(green(r#"{"root":"root","a":1,"b":2,"level":"info"}"#).as_str())
    );
    Ok(())
}

#[test]
fn test_one_line_per_call_in_order() -> Result<()> {
    let (mut recorder, writer) = capture_recorder(LoggerConfig::default().with_root("svc"));

    recorder.info("first")?;
    recorder.error("second")?;
    recorder.debug(json!({ "step": 3 }))?;

    let lines = writer.take();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("\u{1b}[32m") && lines[0].contains("first"));
    assert!(lines[1].starts_with("\u{1b}[31m") && lines[1].contains("second"));
    assert!(lines[2].starts_with("\u{1b}[34m") && lines[2].contains(r#""step":3"#));
    Ok(())
}

#[test]
fn test_warn_shorthand_uses_warning_label() -> Result<()> {
    let (mut recorder, writer) = capture_recorder(LoggerConfig::default());

    recorder.warn("disk almost full")?;

    assert_eq!(recorder.level(), Some("warning"));
    assert_eq!(
        writer.last(),
        Some(
            "\u{1b}[33m{\"root\":\"root\",\"message\":\"disk almost full\",\"level\":\"warning\"}\u{1b}[39m"
                .to_string()
        )
    );
    Ok(())
}

#[test]
fn test_custom_formatter() -> Result<()> {
    let config = LoggerConfig::default().with_formatter(|record: &LogRecord| {
        Some(format!("hello {}", record.message().unwrap_or_default()))
    });
    let (mut recorder, writer) = capture_recorder(config);

    recorder.log(Some(json!("world")), None)?;

    assert_eq!(writer.lines(), [green("hello world")]);
    Ok(())
}

#[test]
fn test_custom_transport_gets_call_level() -> Result<()> {
    let seen: Arc<Mutex<Vec<(Option<String>, String)>>> = Arc::default();
    let sink = Arc::clone(&seen);

    let mut recorder = LogRecorder::new(LoggerConfig::default().with_transport(
        move |level: Option<&str>, message: &str| -> crate::Result<()> {
            let entry = (level.map(str::to_string), message.to_string());
            sink.lock().push(entry);
            Ok(())
        },
    ));

    recorder.log(Some(json!("no level")), None)?;
    recorder.log(Some(json!("explicit")), Some("custom"))?;

    let seen = seen.lock();
    assert_eq!(seen.len(), 2);
    // the record defaults to info, the transport still sees the absent label
    assert_eq!(seen[0].0, None);
    assert!(seen[0].1.contains(r#""level":"info""#));
    assert_eq!(seen[1].0.as_deref(), Some("custom"));
    Ok(())
}

#[test]
#[traced_test]
fn test_formatter_without_output_is_dropped() -> Result<()> {
    let config =
        LoggerConfig::default().with_formatter(|_: &LogRecord| -> Option<String> { None });
    let (mut recorder, writer) = capture_recorder(config);

    recorder.log(Some(json!("lost")), Some("error"))?;

    assert!(writer.is_empty());
    assert!(logs_contain("formatter produced no output"));
    Ok(())
}

#[test]
fn test_transport_failure_propagates() {
    let mut recorder = LogRecorder::new(LoggerConfig::default().with_transport(
        crate::ColorTransport::new(|_: &str| -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }),
    ));

    let err = recorder.info("hello").unwrap_err();

    assert!(matches!(err, LoggerError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe));
}
