//! Appender over any `io::Write`

use crate::core::{Appender, Result};
use std::io::Write;

/// Writes records to an arbitrary writer, one line each.
///
/// Useful for in-memory capture, pipes, or sockets the host already owns.
///
/// # Example
///
/// ```
/// use proxy_logger::appenders::WriterAppender;
/// use proxy_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .appender(WriterAppender::new(Vec::<u8>::new()))
///     .build();
/// logger.info("captured");
/// ```
pub struct WriterAppender<W: Write + Send> {
    writer: Option<W>,
    name: String,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            name: "writer".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&mut self, line: &str) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            let mut output = Vec::with_capacity(line.len() + 1);
            output.extend_from_slice(line.as_bytes());
            output.push(b'\n');
            writer.write_all(&output)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
