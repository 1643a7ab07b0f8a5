//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK provider → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `<data dir>/storefront-otlp.json` as one OTLP JSON document
//! per line. The file rotates at 10 MiB and keeps three backups.
//!
//! The filter comes from the `trace_level` plugin option (default `info`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `exporter`: Span exporter and tracer provider
//! - `otlp`: OTLP JSON encoding
//! - `rotation`: Size-rotated line file

mod exporter;
pub mod init;
mod otlp;
mod rotation;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL, TRACE_FILE_NAME};
