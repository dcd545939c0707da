//! Appender trait for log output destinations

use super::error::Result;

/// A destination for rendered records.
///
/// The logger renders each record to a single line (no trailing newline)
/// and hands it to `append` while holding the sink lock, so an
/// implementation sees one call per record and never has to synchronize
/// on its own.
pub trait Appender: Send {
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    /// Flush and release the underlying handle. Called once, on shutdown.
    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn name(&self) -> &str;
}
