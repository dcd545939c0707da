//! Appender implementations

pub mod console;
pub mod file;
pub mod writer;

pub use console::{ConsoleAppender, ConsoleStream};
pub use file::FileAppender;
pub use writer::WriterAppender;

// Re-export trait for convenience
pub use crate::core::Appender;
