//! OpenTelemetry tracing with a local span file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → zevents-spans.jsonl
//! ```
//!
//! - One flat JSON record per finished span
//! - Size-based rotation into numbered backups (`.1` newest)
//!
//! The filter comes from the `trace_level` plugin option and defaults to
//! `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: Span to JSON record
//! - [`file_writer`]: Rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
