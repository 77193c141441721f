use serde::Serialize;
use std::cell::RefCell;

thread_local! {
    static METRICS: RefCell<CoreMetrics> = const { RefCell::new(CoreMetrics::new()) };
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = const { RefCell::new(None) };
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    SpecBuild {
        fetched_columns: u64,
        fetched_buffer_reused: bool,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

///
/// CoreMetrics
///
/// Process-local build counters. Counters saturate rather than wrap.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CoreMetrics {
    pub spec_builds: u64,
    pub fetched_columns: u64,
    pub fetched_buffer_reuses: u64,
}

impl CoreMetrics {
    const fn new() -> Self {
        Self {
            spec_builds: 0,
            fetched_columns: 0,
            fetched_buffer_reuses: 0,
        }
    }
}

/// GlobalMetricsSink
/// Default process-local sink that writes into thread-local metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::SpecBuild {
                fetched_columns,
                fetched_buffer_reused,
            } => {
                with_state_mut(|m| {
                    m.spec_builds = m.spec_builds.saturating_add(1);
                    m.fetched_columns = m.fetched_columns.saturating_add(fetched_columns);
                    if fetched_buffer_reused {
                        m.fetched_buffer_reuses = m.fetched_buffer_reuses.saturating_add(1);
                    }
                });
            }
        }
    }
}

/// Route an event to the installed sink.
pub(crate) fn record(event: MetricsEvent) {
    let overridden = SINK_OVERRIDE.with(|s| *s.borrow());

    if let Some(ptr) = overridden {
        // INVARIANT:
        // The pointer is installed and cleared by `with_sink_override`,
        // whose borrowed sink outlives every `record` call made inside its
        // closure. `record` is never re-entered from a sink.
        unsafe { (*ptr).record(event) };
        return;
    }

    GlobalMetricsSink.record(event);
}

/// Install `sink` as the thread's sink for the duration of `f`.
pub fn with_sink_override<R>(sink: &dyn MetricsSink, f: impl FnOnce() -> R) -> R {
    // The thread-local stores a `'static`-typed raw pointer, but `sink` only
    // borrows for this call. The pointer is installed and cleared within this
    // function (see the INVARIANT in `record`), so laundering the lifetime here
    // is sound; `transmute` changes only the erased lifetime, not the value.
    let ptr: *const dyn MetricsSink =
        unsafe { std::mem::transmute(std::ptr::from_ref(sink)) };
    SINK_OVERRIDE.with(|s| *s.borrow_mut() = Some(ptr));
    let out = f();
    SINK_OVERRIDE.with(|s| *s.borrow_mut() = None);
    out
}

/// Point-in-time snapshot of the thread's counters.
#[must_use]
pub fn metrics_report() -> CoreMetrics {
    METRICS.with(|m| *m.borrow())
}

/// Reset all counters (useful in tests).
pub fn metrics_reset() {
    with_state_mut(|m| *m = CoreMetrics::default());
}

fn with_state_mut<R>(f: impl FnOnce(&mut CoreMetrics) -> R) -> R {
    METRICS.with(|m| f(&mut m.borrow_mut()))
}

///
/// TESTS
///
