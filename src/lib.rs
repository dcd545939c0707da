//! # Proxy Logger
//!
//! Structured, leveled logging for TLS-terminating HTTP servers and
//! reverse proxies.
//!
//! ## Features
//!
//! - **Facade**: one [`Logger`] built from a destination, a level, a format
//!   and bound fields, shared across request handlers
//! - **Request events**: [`Logger::log_request`] records the negotiated TLS
//!   state of a completed request
//! - **Error stream**: [`Logger::writer`] is an `io::Write` sink for the
//!   host's error log, tagging each line `result=success` or `result=denied`
//! - **Rendering**: JSON or logfmt-style text, one complete line per record
//! - **Thread Safe**: records from concurrent callers never interleave
//!
//! ## Example
//!
//! ```
//! use proxy_logger::prelude::*;
//!
//! let logger = Logger::new("stdout", "info", "json", Fields::new().with_field("type", "system"))?;
//!
//! logger.info("listening on :443");
//! logger.with_field("upstream", "10.0.0.7:80").warn("upstream slow");
//!
//! let event = ConnectionEvent::new("1.2.3.4:55")
//!     .with_server_name("api.example.com")
//!     .with_version(0x0303)
//!     .with_handshake_complete(true)
//!     .with_cipher_suite(0x1301);
//! logger.log_request(&event);
//!
//! logger.shutdown()?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod access;
pub mod appenders;
pub mod core;
pub mod macros;
pub mod tls;

pub mod prelude {
    pub use crate::access::{classify, Classifier, ErrorLogWriter, MarkerMatch, Outcome};
    pub use crate::appenders::{ConsoleAppender, FileAppender, WriterAppender};
    pub use crate::core::{
        Appender, Destination, Emission, Emitter, Entry, FieldValue, Fields, FormatterConfig,
        LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        OutputFormat, Result, TerminalPolicy, TimestampFormat,
    };
    pub use crate::tls::{
        format_request_line, tls_version_name, CipherSuiteResolver, ConnectionEvent,
        IanaCipherSuites, TlsVersion,
    };
}

pub use self::access::{classify, ErrorLogWriter, Outcome};
pub use self::appenders::{ConsoleAppender, FileAppender, WriterAppender};
pub use self::core::{
    Appender, Destination, Emission, Emitter, Entry, FieldValue, Fields, FormatterConfig,
    LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
    OutputFormat, Result, TerminalPolicy, TimestampFormat,
};
pub use self::tls::{tls_version_name, ConnectionEvent};
