//! Log entry structure

use super::log_context::Fields;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record: severity, message and the fields in effect for the call.
///
/// The timestamp is assigned at creation. Entries are rendered and written
/// immediately; nothing keeps them afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Fields::is_empty")]
    pub fields: Fields,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            fields: Fields::new(),
        }
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_no_fields() {
        let entry = LogEntry::new(LogLevel::Info, "listening");
        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.message, "listening");
        assert!(entry.fields.is_empty());
    }

    #[test]
    fn test_message_is_kept_verbatim() {
        // Escaping is the renderer's job, not the entry's
        let entry = LogEntry::new(LogLevel::Warn, "line one\nline two");
        assert_eq!(entry.message, "line one\nline two");
    }

    #[test]
    fn test_with_fields() {
        let entry = LogEntry::new(LogLevel::Info, "request")
            .with_fields(Fields::new().with_field("result", "success"));
        assert_eq!(entry.fields.len(), 1);
    }
}
