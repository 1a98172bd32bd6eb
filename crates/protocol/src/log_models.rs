//! Dispatcher log event models.
//!
//! Log events form an ephemeral, append-only stream ordered by emission
//! time. The dispatcher is the only writer; agents emit through it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a log event.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// One immutable log record.
///
/// Rendered as a single human-readable line:
/// `timestamp | level | actor | message`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LogEvent {
    /// Emission time, stamped when the event is created.
    pub timestamp: DateTime<Utc>,

    pub level: LogLevel,

    /// Who emitted the event: an agent name or the dispatcher itself.
    pub actor: String,

    pub message: String,
}

impl LogEvent {
    /// Create an event stamped with the current time.
    pub fn new(level: LogLevel, actor: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            actor: actor.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.timestamp.to_rfc3339(),
            self.level,
            self.actor,
            self.message
        )
    }
}
