//! OpenTelemetry tracer provider backed by the span file.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Span exporter appending one JSON line per span to a rotating file.
///
/// Used with the SDK's simple span processor, so every span is written as
/// soon as it ends.
struct FileSpanExporter {
    /// Rotating output file.
    writer: FileWriter,
    /// Span to JSON record conversion.
    formatter: SpanFormatter,
    /// Set by `shutdown`; later exports fail.
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    /// Creates an exporter writing to `file_path`.
    ///
    /// # Parameters
    ///
    /// * `file_path` - Span file, created on first export
    /// * `resource` - Resource whose `service.name` tags each record
    fn new(file_path: PathBuf, resource: &Resource) -> Self {
        Self {
            writer: FileWriter::new(file_path),
            formatter: SpanFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }

    /// Writes every span of `batch` as its own line.
    ///
    /// # Returns
    ///
    /// - `Ok(())` when all records were written
    /// - `Err(TraceError)` if the exporter is shut down or a write fails
    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }

        for line in self.formatter.format_batch(batch) {
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for FileSpanExporter {
    /// Exports synchronously; the returned future is already resolved.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    /// Marks the exporter as shut down. The file handle closes on drop.
    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// The service name is captured at construction.
    fn set_resource(&mut self, _resource: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Creates a tracer provider exporting every finished span to `file_path`.
///
/// # Parameters
///
/// * `file_path` - Path to the JSON lines span file
/// * `resource` - OpenTelemetry resource metadata (service name)
///
/// # Returns
///
/// A `TracerProvider` ready for `tracing-opentelemetry`.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_land_in_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zevents-spans.jsonl");
        let resource = Resource::new(vec![KeyValue::new("service.name", "zevents")]);
        let provider = create_tracer_provider(path.clone(), resource);

        let tracer = provider.tracer("zevents");
        tracer.in_span("submit_form", |_cx| {});
        let _ = provider.force_flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        let record: serde_json::Value =
            serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        assert_eq!(record["name"], "submit_form");
        assert_eq!(record["service"], "zevents");
    }
}
