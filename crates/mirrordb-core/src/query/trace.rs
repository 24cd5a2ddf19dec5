//! Query tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! execution semantics.

///
/// QueryTraceSink
///

pub trait QueryTraceSink: Send + Sync {
    fn on_event(&self, event: QueryTraceEvent);
}

///
/// TracePhase
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TracePhase {
    Access,
    Filter,
    Order,
    Page,
}

///
/// QueryTraceEvent
///
/// `Access` counts rows fetched from the store across every lookup;
/// `Filter` counts the combined candidate set; `Order` and `Page` count
/// rows surviving each later phase.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryTraceEvent {
    Start { conditioned: bool },
    Phase { phase: TracePhase, rows: u64 },
    Finish { total: u64, returned: u64 },
}

///
/// TraceContext
///
/// Nullable sink handle threaded through one `find` call.
///

#[derive(Clone, Copy)]
pub(crate) struct TraceContext<'a> {
    sink: Option<&'a dyn QueryTraceSink>,
}

impl<'a> TraceContext<'a> {
    pub(crate) const fn new(sink: Option<&'a dyn QueryTraceSink>) -> Self {
        Self { sink }
    }

    pub(crate) fn emit(&self, event: QueryTraceEvent) {
        if let Some(sink) = self.sink {
            sink.on_event(event);
        }
    }

    pub(crate) fn phase(&self, phase: TracePhase, rows: usize) {
        self.emit(QueryTraceEvent::Phase {
            phase,
            rows: rows as u64,
        });
    }
}
