//! Observability: build telemetry and the sink abstraction.
//!
//! Fetch-spec logic MUST NOT touch counter state directly.
//! All instrumentation flows through [`MetricsEvent`] and [`MetricsSink`];
//! this module is the only bridge between build logic and counter state.

pub(crate) mod sink;

pub use sink::{
    CoreMetrics, MetricsEvent, MetricsSink, metrics_report, metrics_reset, with_sink_override,
};
