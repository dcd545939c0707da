//! Logger configuration
//!
//! `LoggerConfig` mirrors the construction parameters of the facade as
//! plain strings so it can be embedded in a host's configuration file and
//! deserialized with serde. Validation happens in [`LoggerConfig::build`].

use super::appender::Appender;
use super::emission::TerminalPolicy;
use super::error::{LoggerError, Result};
use super::log_context::Fields;
use super::log_level::LogLevel;
use super::logger::Logger;
use super::output_format::OutputFormat;
use super::timestamp::{FormatterConfig, TimestampFormat};
use crate::appenders::{ConsoleAppender, FileAppender};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Name selecting the standard output stream
pub const STDOUT_DESTINATION: &str = "stdout";

/// Where rendered records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Open the destination for appending
    pub fn open(&self) -> Result<Box<dyn Appender>> {
        match self {
            Destination::Stdout => Ok(Box::new(ConsoleAppender::new())),
            Destination::File(path) => Ok(Box::new(FileAppender::new(path.clone())?)),
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Destination::Stdout)
    }
}

impl FromStr for Destination {
    type Err = LoggerError;

    /// `""` and `"stdout"` (any case) select standard output; a name made
    /// only of whitespace is rejected; anything else is a file path.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s.eq_ignore_ascii_case(STDOUT_DESTINATION) {
            return Ok(Destination::Stdout);
        }
        if s.trim().is_empty() {
            return Err(LoggerError::BlankDestination);
        }
        Ok(Destination::File(PathBuf::from(s)))
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str(STDOUT_DESTINATION),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Construction parameters of a [`Logger`]
///
/// # Example
///
/// ```
/// use proxy_logger::core::LoggerConfig;
///
/// let config: LoggerConfig = serde_json::from_str(
///     r#"{ "destination": "stdout", "level": "debug", "format": "text" }"#,
/// ).unwrap();
/// let logger = config.build().unwrap();
/// assert_eq!(logger.level(), proxy_logger::LogLevel::Debug);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// `""` / `"stdout"` or a file path
    pub destination: String,
    /// Severity name, case-insensitive; empty means info
    pub level: String,
    /// `"json"` or `"text"`; empty means json
    pub format: String,
    /// Fields bound to every record
    pub fields: Fields,
    #[serde(flatten)]
    pub formatter: FormatterConfig,
    pub terminal_policy: TerminalPolicy,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            destination: STDOUT_DESTINATION.to_string(),
            level: LogLevel::Info.to_str().to_string(),
            format: "json".to_string(),
            fields: Fields::new().with_field("type", "system"),
            formatter: FormatterConfig::default(),
            terminal_policy: TerminalPolicy::default(),
        }
    }
}

impl LoggerConfig {
    pub fn new(
        destination: impl Into<String>,
        level: impl Into<String>,
        format: impl Into<String>,
        fields: Fields,
    ) -> Self {
        Self {
            destination: destination.into(),
            level: level.into(),
            format: format.into(),
            fields,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: FormatterConfig) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn with_terminal_policy(mut self, policy: TerminalPolicy) -> Self {
        self.terminal_policy = policy;
        self
    }

    /// Parse a configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every parameter and open the destination.
    ///
    /// The destination is opened last so a bad level or format never
    /// creates a file.
    pub fn build(self) -> Result<Logger> {
        let level = LogLevel::parse_or_default(&self.level)?;
        let format = OutputFormat::parse_or_default(&self.format)?;
        validate_timestamp_format(&self.formatter.timestamp_format)?;
        let destination: Destination = self.destination.parse()?;
        let appender = destination.open()?;

        Ok(Logger::builder()
            .min_level(level)
            .output_format(format)
            .formatter(self.formatter)
            .fields(self.fields)
            .terminal_policy(self.terminal_policy)
            .boxed_appender(appender)
            .destination(destination)
            .build())
    }
}

// chrono panics when rendering a malformed strftime pattern
fn validate_timestamp_format(format: &TimestampFormat) -> Result<()> {
    if let TimestampFormat::Custom(pattern) = format {
        if pattern.is_empty() {
            return Err(LoggerError::config("timestamp_format", "custom format is empty"));
        }
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "timestamp_format",
                format!("invalid strftime pattern '{}'", pattern),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_destination_stdout_names() {
        assert_eq!("".parse::<Destination>().unwrap(), Destination::Stdout);
        assert_eq!("stdout".parse::<Destination>().unwrap(), Destination::Stdout);
        assert_eq!("STDOUT".parse::<Destination>().unwrap(), Destination::Stdout);
        assert_eq!("StdOut".parse::<Destination>().unwrap(), Destination::Stdout);
    }

    #[test]
    fn test_destination_blank_is_rejected() {
        assert!(matches!(
            "   ".parse::<Destination>(),
            Err(LoggerError::BlankDestination)
        ));
        assert!(matches!(
            "\t".parse::<Destination>(),
            Err(LoggerError::BlankDestination)
        ));
    }

    #[test]
    fn test_destination_file() {
        let dest: Destination = "/var/log/proxy/system.log".parse().unwrap();
        assert_eq!(dest, Destination::File(PathBuf::from("/var/log/proxy/system.log")));
        assert_eq!(dest.to_string(), "/var/log/proxy/system.log");
        assert!(!dest.is_stdout());
    }

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.destination, "stdout");
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "json");
        assert!(config.fields.contains_key("type"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: LoggerConfig = serde_json::from_str(
            r#"{ "level": "warn", "colors": true, "timestamp_format": "UnixMillis" }"#,
        )
        .unwrap();

        assert_eq!(config.level, "warn");
        assert_eq!(config.destination, "stdout");
        assert!(config.formatter.colors);
        assert_eq!(
            config.formatter.timestamp_format,
            crate::core::TimestampFormat::UnixMillis
        );
    }

    #[test]
    fn test_from_json() {
        let config = LoggerConfig::from_json(r#"{ "format": "text", "fields": { "node": 3 } }"#)
            .unwrap();
        assert_eq!(config.format, "text");
        assert_eq!(config.fields.get("node"), Some(&crate::core::FieldValue::Int(3)));

        assert!(matches!(
            LoggerConfig::from_json("{ not json"),
            Err(LoggerError::JsonError(_))
        ));
    }

    #[test]
    fn test_invalid_custom_timestamp() {
        let config = LoggerConfig::default()
            .with_formatter(FormatterConfig::new().with_custom_timestamp("%Y-%m-%d %Q"));
        let err = config.build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.is_construction_error());

        let config =
            LoggerConfig::default().with_formatter(FormatterConfig::new().with_custom_timestamp(""));
        assert!(config.build().is_err());
    }

    #[test]
    fn test_bad_level_does_not_create_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("never.log");

        let config = LoggerConfig::new(path.to_str().unwrap(), "verbose", "json", Fields::new());
        assert!(matches!(config.build(), Err(LoggerError::InvalidLevel(_))));
        assert!(!path.exists());
    }
}
