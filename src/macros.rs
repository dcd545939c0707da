//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They accept a
//! [`Logger`](crate::Logger) or an [`Entry`](crate::Entry) and return the
//! record's [`Emission`](crate::Emission).
//!
//! # Examples
//!
//! ```
//! use proxy_logger::prelude::*;
//! use proxy_logger::info;
//!
//! let logger = Logger::builder().field("type", "system").build();
//!
//! // Basic logging
//! info!(logger, "Proxy started");
//!
//! // With format arguments
//! let port = 8443;
//! info!(logger, "Listening on port {}", port);
//!
//! // Through a derived entry
//! info!(logger.with_field("upstream", "10.0.0.7:80"), "Upstream {} healthy", "web-1");
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use proxy_logger::prelude::*;
/// # let logger = Logger::builder().build();
/// use proxy_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Upstream returned {}", 502);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::core::Emitter as _;
        ($logger).log($level, format!($($arg)+))
    }};
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use proxy_logger::prelude::*;
/// # let logger = Logger::builder().min_level(LogLevel::Trace).build();
/// use proxy_logger::trace;
/// trace!(logger, "Reading ClientHello");
/// trace!(logger, "Record length: {}", 517);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use proxy_logger::prelude::*;
/// # let logger = Logger::builder().build();
/// use proxy_logger::debug;
/// debug!(logger, "Session cache miss");
/// debug!(logger, "Pool size: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use proxy_logger::prelude::*;
/// # let logger = Logger::builder().build();
/// use proxy_logger::info;
/// info!(logger, "Certificate reloaded");
/// info!(logger, "Serving {} hosts", 12);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use proxy_logger::prelude::*;
/// # let logger = Logger::builder().build();
/// use proxy_logger::warn;
/// warn!(logger, "Certificate expires soon");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use proxy_logger::prelude::*;
/// # let logger = Logger::builder().build();
/// use proxy_logger::error;
/// error!(logger, "Upstream unreachable");
/// error!(logger, "Handshake failed: {}", "unknown ca");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// With the default [`TerminalPolicy::Enforce`](crate::TerminalPolicy) the
/// process exits after the record is written.
///
/// # Examples
///
/// ```
/// # use proxy_logger::prelude::*;
/// # let logger = Logger::builder().terminal_policy(TerminalPolicy::Defer).build();
/// use proxy_logger::fatal;
/// let emission = fatal!(logger, "Unable to bind {}", "0.0.0.0:443");
/// assert_eq!(emission, Emission::Exit { code: 1 });
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
