//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod emission;
pub mod emitter;
pub mod error;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod timestamp;

pub use appender::Appender;
pub use config::{Destination, LoggerConfig, STDOUT_DESTINATION};
pub use emission::{Emission, TerminalPolicy, FATAL_EXIT_CODE};
pub use emitter::{Emitter, Entry};
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, Fields};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::{OutputFormat, LEVEL_KEY, MESSAGE_KEY, TIME_KEY};
pub use timestamp::{FormatterConfig, TimestampFormat};
