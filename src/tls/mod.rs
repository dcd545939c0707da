//! TLS connection metadata and request event logging
//!
//! After a request completes, the host describes the connection's
//! negotiated TLS state with a [`ConnectionEvent`] and hands it to
//! [`Logger::log_request`](crate::Logger::log_request). The record's message
//! is a comma-separated line ending in the `,success` marker, so the same
//! text classifies as a success if it is fed back through the error stream.

pub mod cipher_suite;
pub mod event;
pub mod version;

pub use cipher_suite::{CipherSuiteResolver, IanaCipherSuites};
pub use event::{format_request_line, ConnectionEvent};
pub use version::{tls_version_name, TlsVersion, UNKNOWN_VERSION};
