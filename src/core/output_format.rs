//! Output format configuration for log entries
//!
//! Provides the two renderings a logger can be configured with:
//! - Json: one flat JSON object per line (default)
//! - Text: `key=value` pairs, readable on a terminal

use super::error::LoggerError;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::timestamp::FormatterConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Keys every rendered record owns
pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const MESSAGE_KEY: &str = "msg";

/// Prefix given to user fields that collide with a record key
const CLASH_PREFIX: &str = "fields.";

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON format for machine processing
    ///
    /// Example: `{"level":"info","msg":"Request processed","time":"2025-01-08T10:30:45Z","type":"system"}`
    #[default]
    Json,

    /// Human-readable key=value format
    ///
    /// Example: `time="2025-01-08T10:30:45Z" level=info msg="Request processed" type=system`
    Text,
}

impl OutputFormat {
    /// Parse a formatter name, treating an empty string as `Json`
    pub fn parse_or_default(s: &str) -> Result<Self, LoggerError> {
        if s.is_empty() {
            return Ok(OutputFormat::default());
        }
        s.parse()
    }

    /// Format a log entry as a single line, without the trailing newline
    pub fn format(&self, entry: &LogEntry, config: &FormatterConfig) -> String {
        match self {
            OutputFormat::Json => self.format_json(entry, config),
            OutputFormat::Text => self.format_text(entry, config),
        }
    }

    /// Format as JSON
    fn format_json(&self, entry: &LogEntry, config: &FormatterConfig) -> String {
        let mut json_obj = serde_json::Map::new();

        for (key, value) in entry.fields.iter() {
            json_obj.insert(resolve_clash(key), value.to_json_value());
        }

        json_obj.insert(
            TIME_KEY.to_string(),
            config.timestamp_format.to_json_value(&entry.timestamp),
        );
        json_obj.insert(
            LEVEL_KEY.to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );
        json_obj.insert(
            MESSAGE_KEY.to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }

    /// Format as text
    fn format_text(&self, entry: &LogEntry, config: &FormatterConfig) -> String {
        let mut parts = Vec::with_capacity(3 + entry.fields.len());

        parts.push(format!(
            "{}={}",
            TIME_KEY,
            quote_text_value(&config.timestamp_format.format(&entry.timestamp))
        ));
        parts.push(format!("{}={}", LEVEL_KEY, level_text(entry.level, config.colors)));
        parts.push(format!("{}={}", MESSAGE_KEY, quote_text_value(&entry.message)));

        for (key, value) in entry.fields.iter() {
            parts.push(format!(
                "{}={}",
                resolve_clash(key),
                quote_text_value(&value.to_string())
            ));
        }

        parts.join(" ")
    }
}

impl FromStr for OutputFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}

fn resolve_clash(key: &str) -> String {
    match key {
        TIME_KEY | LEVEL_KEY | MESSAGE_KEY => format!("{}{}", CLASH_PREFIX, key),
        _ => key.to_string(),
    }
}

#[cfg(feature = "console")]
fn level_text(level: LogLevel, colors: bool) -> String {
    use colored::Colorize;
    if colors {
        level.to_str().color(level.color_code()).to_string()
    } else {
        level.to_str().to_string()
    }
}

#[cfg(not(feature = "console"))]
fn level_text(level: LogLevel, _colors: bool) -> String {
    level.to_str().to_string()
}

/// Bare values may only contain characters that cannot be mistaken for
/// separators; anything else is quoted and escaped. Empty values stay
/// bare (`key=`), as logrus prints them.
fn needs_quoting(value: &str) -> bool {
    value.chars().any(|c| {
        !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '@' | '^' | '+'))
    })
}

fn quote_text_value(value: &str) -> String {
    if needs_quoting(value) {
        format!("{:?}", value)
    } else {
        value.to_string()
    }
}
