//! Log entry type for JSONL logging.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single line of a JSONL log file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// RFC 3339 timestamp with milliseconds
    pub ts: String,

    /// trace, debug, info, warn or error
    pub level: String,

    /// Which front end wrote the entry (e.g. "desktop", "cli")
    pub session: String,

    /// Module path of the event (e.g. "drachenhort_core::loader")
    pub target: String,

    pub msg: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Span path, outermost first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl LogEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        level: impl Into<String>,
        session: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            session: session.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_serialization() {
        let entry = LogEntry::new("info", "desktop", "drachenhort_core::loader", "Loaded cards");

        let json = entry.to_json_line().unwrap();
        assert!(json.contains("\"level\":\"info\""));
        assert!(json.contains("\"session\":\"desktop\""));
        assert!(!json.contains("\"fields\""));

        let parsed = LogEntry::from_json_line(&json).unwrap();
        assert_eq!(parsed.msg, "Loaded cards");
        assert_eq!(parsed.target, "drachenhort_core::loader");
    }

    #[test]
    fn test_log_entry_with_fields() {
        let entry = LogEntry::new("debug", "cli", "drachenhort_core::gallery", "Search term changed")
            .with_fields(serde_json::json!({ "term": "drache" }))
            .with_span("list");

        let json = entry.to_json_line().unwrap();
        assert!(json.contains("\"term\":\"drache\""));
        assert!(json.contains("\"span\":\"list\""));
    }
}
