//! A `tracing` layer that forwards events into a shared [`LogRecorder`].
//!
//! Event fields become the payload mapping. An event carrying nothing but its message is
//! logged as a plain text payload.

use std::{fmt, sync::Arc};

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tintlog::{LogLevel, LogRecorder};
use tracing::{Event, Metadata};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    util::SubscriberInitExt,
    Layer,
};

pub type SharedRecorder = Arc<Mutex<LogRecorder>>;

#[derive(Default)]
struct FieldVisitor {
    fields: Map<String, Value>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &tracing::field::Field, value: impl Into<Value>) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    /// A lone message is logged as text, everything else as a mapping.
    fn into_payload(mut self) -> Value {
        if self.fields.len() == 1 {
            if let Some(Value::String(message)) = self.fields.remove("message") {
                return Value::String(message);
            }
        }
        Value::Object(self.fields)
    }
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.insert(field, value);
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.insert(field, value);
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.insert(field, value);
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.insert(field, value);
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        // NaN and infinities have no JSON form
        let value = serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number);
        self.insert(field, value);
    }

    fn record_error(
        &mut self,
        field: &tracing::field::Field,
        value: &(dyn std::error::Error + 'static),
    ) {
        self.insert(field, value.to_string());
    }
}

/// Mapping from `tracing` levels to severity labels.
fn map_level(meta: &Metadata<'_>) -> LogLevel {
    use tracing::Level;
    match *meta.level() {
        Level::ERROR => LogLevel::Error,
        Level::WARN => LogLevel::Warn,
        Level::INFO => LogLevel::Info,
        Level::DEBUG => LogLevel::Debug,
        Level::TRACE => LogLevel::Debug,
    }
}

/// Events emitted by the recorder itself, which would re-enter the recorder's lock.
fn is_own_event(meta: &Metadata<'_>) -> bool {
    let target = meta.target();
    target == "tintlog" || target.starts_with("tintlog::")
}

/// A tracing subscriber layer that forwards events into a [`LogRecorder`].
pub struct RecorderLayer {
    recorder: SharedRecorder,
    include_target: bool,
}

impl RecorderLayer {
    pub fn new(recorder: SharedRecorder) -> Self {
        Self {
            recorder,
            include_target: false,
        }
    }

    /// Adds the event's target to the payload as a `target` field.
    pub fn with_target(mut self) -> Self {
        self.include_target = true;
        self
    }

    pub fn recorder(&self) -> &SharedRecorder {
        &self.recorder
    }
}

impl<S> Layer<S> for RecorderLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if is_own_event(meta) {
            return;
        }

        let level = map_level(meta);
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        if self.include_target {
            visitor
                .fields
                .insert("target".to_string(), Value::from(meta.target()));
        }

        // Best-effort: a layer has nowhere to report a failed write
        let _ = self
            .recorder
            .lock()
            .log(Some(visitor.into_payload()), Some(level.label()));
    }
}

/// Installs a [`RecorderLayer`] over `recorder` as the global subscriber.
///
/// Returns the `tracing` error if a global subscriber is already set.
pub fn init_recorder_tracing(
    recorder: SharedRecorder,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::registry::Registry;

    let layer = RecorderLayer::new(recorder);
    let subscriber = Registry::default().with(layer);

    subscriber.try_init()
}
