//! Subscriber setup: `tracing` → OpenTelemetry → trace file.

use super::exporter::file_tracer_provider;
use super::otlp::SCOPE_NAME;
use crate::domain::error::Result;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::{Path, PathBuf};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "storefront-otlp.json";

/// Filter used when `trace_level` is not a valid directive.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber and returns the trace file path.
///
/// `trace_level` is an `EnvFilter` directive such as `debug` or
/// `zstorefront::api=trace`; invalid directives fall back to `info`. Calling
/// this twice keeps the first subscriber.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
pub fn init_tracing(trace_level: &str, data_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(data_dir)?;
    let trace_file = data_dir.join(TRACE_FILE_NAME);

    let filter = EnvFilter::try_new(trace_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));
    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(trace_file.clone(), resource);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)));

    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(trace_file)
}
