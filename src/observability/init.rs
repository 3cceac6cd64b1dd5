//! Tracing subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the span log inside the data directory.
pub const TRACE_FILE_NAME: &str = "zevents-spans.jsonl";

/// Installs the global subscriber: `EnvFilter` from `trace_level` (default
/// `info`) feeding an OpenTelemetry layer that writes spans to
/// [`TRACE_FILE_NAME`] in the plugin data directory.
///
/// Tracing is optional. If the data directory cannot be created, or a
/// subscriber is already installed, this does nothing.
///
/// # Parameters
///
/// * `config` - Plugin configuration; only `trace_level` is read
///
/// # File Location
///
/// `/host/.local/share/zellij/zevents/zevents-spans.jsonl` in the sandbox,
/// which is `~/.local/share/zellij/zevents/` when Zellij runs from the home
/// directory.
///
/// # Example
///
/// ```rust,no_run
/// use zevents::observability::init_tracing;
/// use zevents::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "zevents",
    )]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("zevents"));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
