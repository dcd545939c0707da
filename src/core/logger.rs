//! Logger facade
//!
//! One `Logger` is built per process (or per listener) and shared by
//! reference or `Arc` with every request handler. It owns the sink, the
//! minimum level, the rendering format and the fields bound to every
//! record.

use super::{
    appender::Appender,
    config::{Destination, LoggerConfig},
    emission::{Emission, TerminalPolicy},
    emitter::Entry,
    error::{LoggerError, Result},
    log_context::{FieldValue, Fields},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    output_format::OutputFormat,
    timestamp::FormatterConfig,
};
use crate::appenders::ConsoleAppender;
use parking_lot::Mutex;

pub struct Logger {
    min_level: LogLevel,
    output_format: OutputFormat,
    formatter: FormatterConfig,
    /// Fields bound to every record of this logger
    fields: Fields,
    destination: Option<Destination>,
    /// `None` once shut down
    sink: Mutex<Option<Box<dyn Appender>>>,
    terminal_policy: TerminalPolicy,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Build a logger from raw construction parameters.
    ///
    /// - `destination`: `""` or `"stdout"` (any case) for standard output,
    ///   otherwise a file path opened for appending
    /// - `level`: severity name, case-insensitive; `""` means info
    /// - `format`: `"json"` or `"text"`; `""` means json
    /// - `fields`: bound to every record
    ///
    /// # Example
    ///
    /// ```
    /// use proxy_logger::prelude::*;
    ///
    /// let logger = Logger::new("stdout", "info", "json", Fields::new().with_field("type", "system"))
    ///     .expect("valid configuration");
    /// logger.info("listener ready");
    ///
    /// assert!(Logger::new("stdout", "verbose", "json", Fields::new()).is_err());
    /// ```
    pub fn new(destination: &str, level: &str, format: &str, fields: Fields) -> Result<Self> {
        LoggerConfig::new(destination, level, format, fields).build()
    }

    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        config.build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use proxy_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .output_format(OutputFormat::Text)
    ///     .field("type", "system")
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn level(&self) -> LogLevel {
        self.min_level
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn formatter(&self) -> &FormatterConfig {
        &self.formatter
    }

    /// Fields bound to every record
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Where records go, when the logger was built from a destination
    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    pub fn terminal_policy(&self) -> TerminalPolicy {
        self.terminal_policy
    }

    /// Get the logger metrics
    ///
    /// # Example
    ///
    /// ```
    /// use proxy_logger::prelude::*;
    ///
    /// let logger = Logger::builder().build();
    /// logger.info("hello");
    /// println!("Written: {}", logger.metrics().total_logged());
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Derive an emitter carrying one extra field
    pub fn with_field<K, V>(&self, key: K, value: V) -> Entry<'_>
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Entry::new(self, Fields::new().with_field(key, value))
    }

    /// Derive an emitter carrying extra fields
    pub fn with_fields(&self, fields: Fields) -> Entry<'_> {
        Entry::new(self, fields)
    }

    /// Render and write one record, then apply the terminal policy.
    pub(crate) fn dispatch(
        &self,
        level: LogLevel,
        message: String,
        extra: Option<&Fields>,
    ) -> Emission {
        let emission = Emission::for_level(level, &message);

        if self.is_enabled(level) {
            let fields = match extra {
                Some(extra) if !extra.is_empty() => self.fields.merged_with(extra),
                _ => self.fields.clone(),
            };
            let entry = LogEntry::new(level, message).with_fields(fields);
            self.write_entry(&entry);
        } else {
            self.metrics.record_filtered();
        }

        if emission.is_terminal() && self.terminal_policy == TerminalPolicy::Enforce {
            if let Err(e) = self.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush before terminating: {}", e);
            }
            emission.enforce();
        }
        emission
    }

    /// Write an already-built entry, bypassing level filtering
    pub fn write_entry(&self, entry: &LogEntry) {
        // Render outside the lock; only the write is serialized
        let line = self.output_format.format(entry, &self.formatter);

        let mut sink = self.sink.lock();
        let Some(appender) = sink.as_mut() else {
            self.metrics.record_dropped();
            return;
        };

        let append_result =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| appender.append(&line)));

        match append_result {
            Ok(Ok(())) => {
                self.metrics.record_logged();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
                self.metrics.record_dropped();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' panicked: {}",
                    appender.name(),
                    panic_msg
                );
                self.metrics.record_dropped();
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut sink = self.sink.lock();
        match sink.as_mut() {
            Some(appender) => appender.flush(),
            None => Ok(()),
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.sink.lock().is_none()
    }

    /// Flush and release the sink (closing the log file, if any).
    ///
    /// Safe to call more than once, and while other threads are still
    /// emitting: records that arrive afterwards are dropped and counted in
    /// [`LoggerMetrics::dropped_count`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use proxy_logger::prelude::*;
    ///
    /// let logger = Logger::new("/var/log/proxy/system.log", "info", "json", Fields::new())?;
    /// logger.info("shutting down");
    /// logger.shutdown()?;
    /// logger.shutdown()?; // no-op
    /// # Ok::<(), LoggerError>(())
    /// ```
    pub fn shutdown(&self) -> Result<()> {
        let appender = self.sink.lock().take();

        let Some(mut appender) = appender else {
            return Ok(());
        };

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} dropped logs (drop rate: {:.2}%)",
                dropped,
                self.metrics.drop_rate()
            );
        }

        appender.close().map_err(|e| match e {
            LoggerError::IoError(source) => LoggerError::writer(format!(
                "failed to close '{}': {}",
                appender.name(),
                source
            )),
            other => other,
        })
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            eprintln!("[LOGGER ERROR] Failed to close sink during drop: {}", e);
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("output_format", &self.output_format)
            .field("fields", &self.fields)
            .field("destination", &self.destination)
            .field("terminal_policy", &self.terminal_policy)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Unlike [`Logger::new`], the builder takes typed values and any
/// [`Appender`], so it cannot fail. Without an appender, records go to
/// standard output.
///
/// # Example
/// ```
/// use proxy_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .appender(ConsoleAppender::stderr())
///     .terminal_policy(TerminalPolicy::Defer)
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    output_format: OutputFormat,
    formatter: FormatterConfig,
    fields: Fields,
    appender: Option<Box<dyn Appender>>,
    destination: Option<Destination>,
    terminal_policy: TerminalPolicy,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            output_format: OutputFormat::default(),
            formatter: FormatterConfig::default(),
            fields: Fields::new(),
            appender: None,
            destination: None,
            terminal_policy: TerminalPolicy::default(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: FormatterConfig) -> Self {
        self.formatter = formatter;
        self
    }

    /// Bind one field to every record
    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.add_field(key, value);
        self
    }

    /// Bind fields to every record
    #[must_use = "builder methods return a new value"]
    pub fn fields(mut self, fields: Fields) -> Self {
        self.fields = self.fields.merged_with(&fields);
        self
    }

    /// Set the sink, replacing any previous one
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_appender(mut self, appender: Box<dyn Appender>) -> Self {
        self.appender = Some(appender);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub(crate) fn destination(mut self, destination: Destination) -> Self {
        self.destination = Some(destination);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn terminal_policy(mut self, policy: TerminalPolicy) -> Self {
        self.terminal_policy = policy;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let (appender, destination) = match self.appender {
            Some(appender) => (appender, self.destination),
            None => (
                Box::new(ConsoleAppender::new()) as Box<dyn Appender>,
                Some(Destination::Stdout),
            ),
        };

        Logger {
            min_level: self.min_level,
            output_format: self.output_format,
            formatter: self.formatter,
            fields: self.fields,
            destination,
            sink: Mutex::new(Some(appender)),
            terminal_policy: self.terminal_policy,
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::WriterAppender;
    use crate::core::Emitter;
    use std::io::Write;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn lines(&self) -> Vec<serde_json::Value> {
            String::from_utf8(self.0.lock().clone())
                .unwrap()
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logger(level: LogLevel) -> (Logger, Capture) {
        let capture = Capture::default();
        let logger = Logger::builder()
            .min_level(level)
            .field("type", "system")
            .appender(WriterAppender::new(capture.clone()))
            .terminal_policy(TerminalPolicy::Defer)
            .build();
        (logger, capture)
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().build();

        assert_eq!(logger.level(), LogLevel::Info);
        assert_eq!(logger.output_format(), OutputFormat::Json);
        assert_eq!(logger.destination(), Some(&Destination::Stdout));
        assert_eq!(logger.terminal_policy(), TerminalPolicy::Enforce);
        assert!(logger.fields().is_empty());
    }

    #[test]
    fn test_bound_fields_on_every_record() {
        let (logger, capture) = capture_logger(LogLevel::Info);

        logger.info("first");
        logger.warn("second");

        let lines = capture.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l["type"] == "system"));
        assert_eq!(lines[1]["level"], "warning");
    }

    #[test]
    fn test_level_filtering() {
        let (logger, capture) = capture_logger(LogLevel::Warn);

        logger.debug("hidden");
        logger.info("hidden");
        logger.warn("shown");
        logger.error("shown");

        assert_eq!(capture.lines().len(), 2);
        assert_eq!(logger.metrics().filtered_count(), 2);
        assert_eq!(logger.metrics().total_logged(), 2);
    }

    #[test]
    fn test_formatted_and_joined_variants() {
        let (logger, capture) = capture_logger(LogLevel::Trace);

        logger.tracef(format_args!("{} bytes from {}", 512, "10.0.0.7"));
        logger.debugln(["upstream", "closed", "early"]);

        let lines = capture.lines();
        assert_eq!(lines[0]["msg"], "512 bytes from 10.0.0.7");
        assert_eq!(lines[0]["level"], "trace");
        assert_eq!(lines[1]["msg"], "upstream closed early");
    }

    #[test]
    fn test_with_fields_scoped_to_entry() {
        let (logger, capture) = capture_logger(LogLevel::Info);

        logger
            .with_field("result", "denied")
            .with_field("type", "access")
            .info("scoped");
        logger.info("unscoped");

        let lines = capture.lines();
        assert_eq!(lines[0]["result"], "denied");
        assert_eq!(lines[0]["type"], "access");
        assert!(lines[1].get("result").is_none());
        assert_eq!(lines[1]["type"], "system");
    }

    #[test]
    fn test_deferred_terminal_emissions() {
        let (logger, capture) = capture_logger(LogLevel::Info);

        assert_eq!(logger.error("bad"), Emission::Continue);
        assert_eq!(logger.fatal("certificate store unreadable"), Emission::Exit { code: 1 });
        assert_eq!(
            logger.panic("listener state corrupted"),
            Emission::Panic {
                message: "listener state corrupted".to_string()
            }
        );

        let lines = capture.lines();
        assert_eq!(lines[1]["level"], "fatal");
        assert_eq!(lines[2]["level"], "panic");
    }

    #[test]
    fn test_terminal_effect_survives_filtering() {
        let (logger, capture) = capture_logger(LogLevel::Panic);

        assert!(logger.fatal("filtered but still fatal").is_terminal());
        assert!(capture.lines().is_empty());
    }

    #[test]
    #[should_panic(expected = "listener state corrupted")]
    fn test_enforced_panic() {
        let logger = Logger::builder()
            .appender(WriterAppender::new(Vec::<u8>::new()))
            .build();
        logger.panic("listener state corrupted");
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let (logger, capture) = capture_logger(LogLevel::Info);

        logger.info("before");
        assert!(logger.shutdown().is_ok());
        assert!(logger.shutdown().is_ok());
        assert!(logger.is_shut_down());

        logger.info("after");
        assert_eq!(capture.lines().len(), 1);
        assert_eq!(logger.metrics().dropped_count(), 1);
        assert!(logger.flush().is_ok());
    }

    #[test]
    fn test_failing_appender_is_counted() {
        struct Broken;

        impl Appender for Broken {
            fn append(&mut self, _line: &str) -> Result<()> {
                Err(LoggerError::other("disk full"))
            }

            fn flush(&mut self) -> Result<()> {
                Ok(())
            }

            fn name(&self) -> &str {
                "broken"
            }
        }

        let logger = Logger::builder().appender(Broken).build();
        for _ in 0..3 {
            logger.info("lost");
        }

        assert_eq!(logger.metrics().dropped_count(), 3);
        assert_eq!(logger.metrics().total_logged(), 0);
    }

    #[test]
    fn test_logger_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }
}
