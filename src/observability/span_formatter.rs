//! Flat JSON span records.
//!
//! Each finished span becomes one self-contained JSON object, so the trace
//! file can be read with `jq` line by line:
//!
//! ```json
//! {"service":"zevents","name":"handle_event","traceId":"…","spanId":"…",
//!  "parentSpanId":"","start":"2024-05-01T09:00:00.000123Z",
//!  "durationMicros":42,"attributes":{"event":"SubmitForm"},
//!  "events":[],"status":"unset"}
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{Key, KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Map, Value as JsonValue};
use std::time::SystemTime;

/// Serializes spans into one-line JSON records.
pub struct SpanFormatter {
    /// Value of the resource's `service.name`, repeated in every record.
    service: String,
}

impl SpanFormatter {
    /// Creates a formatter tagging every record with the resource's
    /// `service.name` (`unknown` when the resource has none).
    ///
    /// # Parameters
    ///
    /// * `resource` - OpenTelemetry resource of the tracer provider
    pub fn new(resource: &Resource) -> Self {
        let service = resource
            .get(Key::from_static_str("service.name"))
            .map_or_else(|| "unknown".to_string(), |v| v.as_str().into_owned());
        Self { service }
    }

    /// Formats a batch of spans.
    ///
    /// # Parameters
    ///
    /// * `batch` - Finished spans handed over by the exporter
    ///
    /// # Returns
    ///
    /// One serialized JSON object per span, in batch order, without trailing
    /// newlines.
    pub fn format_batch(&self, batch: &[SpanData]) -> Vec<String> {
        batch.iter().map(|span| self.format_span(span).to_string()).collect()
    }

    /// Builds the record for one span.
    ///
    /// - IDs as lowercase hex (trace ID: 32 chars, span ID: 16 chars)
    /// - `parentSpanId` empty for root spans
    /// - `start` as RFC 3339 UTC with microseconds
    /// - `durationMicros` saturating at `u64::MAX`
    fn format_span(&self, span: &SpanData) -> JsonValue {
        let parent = if span.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        };
        let duration = span
            .end_time
            .duration_since(span.start_time)
            .unwrap_or_default();

        let events: Vec<JsonValue> = span
            .events
            .iter()
            .map(|event| {
                json!({
                    "name": event.name,
                    "time": timestamp(event.timestamp),
                    "attributes": attributes(&event.attributes),
                })
            })
            .collect();

        json!({
            "service": self.service,
            "name": span.name,
            "traceId": format!("{:032x}", span.span_context.trace_id()),
            "spanId": format!("{:016x}", span.span_context.span_id()),
            "parentSpanId": parent,
            "start": timestamp(span.start_time),
            "durationMicros": u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            "attributes": attributes(&span.attributes),
            "events": events,
            "status": status(&span.status),
        })
    }
}

/// RFC 3339 UTC timestamp with microsecond precision.
fn timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Attribute list as a JSON object keyed by attribute name.
fn attributes(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

/// Maps OpenTelemetry values to native JSON values.
///
/// - Bool → `true`
/// - I64 → `123`
/// - F64 → `1.5`
/// - String → `"..."`
/// - Array → its display string (fallback)
fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.as_str()),
        Value::Array(_) => json!(value.to_string()),
    }
}

/// Span status: `"unset"`, `"ok"`, or `{"error": description}`.
fn status(status: &Status) -> JsonValue {
    match status {
        Status::Unset => json!("unset"),
        Status::Ok => json!("ok"),
        Status::Error { description } => json!({ "error": description.to_string() }),
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("service", &self.service)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn attributes_become_an_object() {
        let attrs = [
            KeyValue::new("event", "SubmitForm"),
            KeyValue::new("count", 3_i64),
            KeyValue::new("dark_mode", true),
        ];
        assert_eq!(
            attributes(&attrs),
            json!({ "event": "SubmitForm", "count": 3, "dark_mode": true })
        );
    }

    #[test]
    fn status_labels() {
        assert_eq!(status(&Status::Unset), json!("unset"));
        assert_eq!(status(&Status::Ok), json!("ok"));
        assert_eq!(
            status(&Status::error("boom")),
            json!({ "error": "boom" })
        );
    }

    #[test]
    fn timestamps_are_rfc3339_utc() {
        let time = UNIX_EPOCH + Duration::from_secs(1_714_554_000);
        assert_eq!(timestamp(time), "2024-05-01T09:00:00.000000Z");
    }

    #[test]
    fn service_name_comes_from_resource() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "zevents")]);
        assert_eq!(SpanFormatter::new(&resource).service, "zevents");
    }
}
