//! `io::Write` adapter over the logger

use super::outcome::{Classifier, Outcome, RESULT_KEY};
use crate::core::{Emitter, Logger};
use std::io;
use std::ops::Deref;
use std::sync::Arc;

/// Byte sink that turns every write into one classified info record.
///
/// Register it as the error log of an HTTP server or reverse proxy. Each
/// `write` call is treated as one line, so the host should write whole
/// lines (as `std::io::Write::write_all` on a pre-rendered buffer does)
/// rather than going through `write!`, which may split a line across calls.
///
/// Writes never fail and always report the full buffer as consumed; sink
/// failures show up in [`LoggerMetrics`](crate::LoggerMetrics) and on stderr.
///
/// # Example
///
/// ```
/// use proxy_logger::prelude::*;
/// use std::io::Write;
///
/// let logger = Logger::builder().field("type", "system").build();
/// let mut error_log = logger.writer();
///
/// error_log.write_all(b"http: TLS handshake error from 10.0.0.9:5123: EOF\n")?;
/// assert_eq!(logger.metrics().denied_outcomes(), 1);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ErrorLogWriter<L: Deref<Target = Logger>> {
    logger: L,
    classifier: Classifier,
}

impl<L: Deref<Target = Logger>> ErrorLogWriter<L> {
    pub fn new(logger: L) -> Self {
        Self {
            logger,
            classifier: Classifier::default(),
        }
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn classifier(&self) -> Classifier {
        self.classifier
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl<L: Deref<Target = Logger>> io::Write for ErrorLogWriter<L> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let (message, outcome) = self.classifier.classify(&text);
        self.logger.log_outcome(message, outcome);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Err(e) = self.logger.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush error log: {}", e);
        }
        Ok(())
    }
}

impl Logger {
    /// Emit an info record tagged with `result=<outcome>`
    pub fn log_outcome(&self, message: &str, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.metrics().record_success(),
            Outcome::Denied => self.metrics().record_denied(),
        };
        self.with_field(RESULT_KEY, outcome.as_str()).info(message);
    }

    /// Error-log writer borrowing this logger
    pub fn writer(&self) -> ErrorLogWriter<&Logger> {
        ErrorLogWriter::new(self)
    }

    /// Error-log writer sharing ownership of the logger, for hosts that
    /// need a `'static` sink such as `Box<dyn Write + Send>`
    pub fn shared_writer(self: &Arc<Self>) -> ErrorLogWriter<Arc<Logger>> {
        ErrorLogWriter::new(Arc::clone(self))
    }
}
