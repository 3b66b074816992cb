//! Transformers for `/logs` entries. Read-only: log views never write
//! back.

use serde::{Deserialize, Serialize};

use super::text_or_empty;

/// Wire shape of one log entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogEntryWire {
    pub timestamp: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    pub message: String,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub process: Option<String>,
    #[serde(default)]
    pub pid: Option<u32>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub raw: String,
}

/// Syslog-style severity, narrowed from the backend's free-form level
/// strings. Unknown levels render as `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl LogLevel {
    fn from_wire(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "emerg" | "emergency" | "panic" => LogLevel::Emergency,
            "alert" => LogLevel::Alert,
            "crit" | "critical" => LogLevel::Critical,
            "err" | "error" => LogLevel::Error,
            "warn" | "warning" => LogLevel::Warning,
            "notice" => LogLevel::Notice,
            "debug" => LogLevel::Debug,
            _ => LogLevel::Info,
        }
    }
}

/// Log source family, matching the backend's accepted `source_type` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    System,
    Kernel,
    Auth,
    Firewall,
    Vpn,
    Nginx,
    Custom,
}

impl LogSource {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "kernel" => LogSource::Kernel,
            "auth" => LogSource::Auth,
            "firewall" => LogSource::Firewall,
            "vpn" => LogSource::Vpn,
            "nginx" => LogSource::Nginx,
            "custom" => LogSource::Custom,
            _ => LogSource::System,
        }
    }
}

/// Normalized log entry; `id` is positional within the fetched window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntryUi {
    pub id: usize,
    pub timestamp: String,
    pub level: LogLevel,
    pub source: String,
    pub source_type: LogSource,
    pub message: String,
    pub process: String,
    pub pid: Option<u32>,
    pub hostname: String,
}

/// Normalize one log entry.
pub fn to_ui_model(wire: &LogEntryWire, index: usize) -> LogEntryUi {
    LogEntryUi {
        id: index + 1,
        timestamp: wire.timestamp.clone(),
        level: LogLevel::from_wire(&text_or_empty(wire.level.as_ref())),
        source: text_or_empty(wire.source.as_ref()),
        source_type: LogSource::from_wire(&text_or_empty(wire.source_type.as_ref())),
        message: wire.message.clone(),
        process: text_or_empty(wire.process.as_ref()),
        pid: wire.pid,
        hostname: text_or_empty(wire.hostname.as_ref()),
    }
}
