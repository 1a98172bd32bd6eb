//! Log sinks and the per-agent logger handle.
//!
//! The dispatcher owns one sink for the process lifetime; agents receive a
//! [`Logger`] bound to their name and never touch the transport directly.
//! There are no ambient globals.

use ad_protocol::log_models::{LogEvent, LogLevel};
use std::sync::{Arc, Mutex};

/// Destination for log events.
///
/// Emission order matches invocation order; execution is single-threaded
/// and synchronous, so sinks only need interior mutability for capture.
pub trait LogSink: Send + Sync {
    fn emit(&self, event: LogEvent);
}

/// Sink that writes one line per event to standard output.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn emit(&self, event: LogEvent) {
        println!("{}", event);
    }
}

/// Sink that captures events in memory, for tests and embedders that want
/// to inspect the stream.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<LogEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in emission order.
    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, event: LogEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

/// Handle an agent uses to emit log events under its own name.
///
/// Cheap to clone; all clones share the dispatcher's sink.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    actor: String,
}

impl Logger {
    pub fn new(sink: Arc<dyn LogSink>, actor: impl Into<String>) -> Self {
        Self {
            sink,
            actor: actor.into(),
        }
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.sink.emit(LogEvent::new(level, self.actor.clone(), message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }
}
