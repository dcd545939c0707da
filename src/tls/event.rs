//! Completed-request events

use super::cipher_suite::{CipherSuiteResolver, IanaCipherSuites};
use super::version::tls_version_name;
use crate::access::SUCCESS_MARKER;
use crate::core::{Emitter, LogLevel, Logger};
use serde::{Deserialize, Serialize};

/// Negotiated TLS state of one completed request.
///
/// Every field is always present; a client that sent no SNI has an empty
/// `server_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEvent {
    pub remote_addr: String,
    pub server_name: String,
    /// Wire version code, e.g. `0x0303`
    pub version: u16,
    pub handshake_complete: bool,
    pub did_resume: bool,
    /// IANA cipher suite identifier
    pub cipher_suite: u16,
}

impl ConnectionEvent {
    pub fn new(remote_addr: impl ToString) -> Self {
        Self {
            remote_addr: remote_addr.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = server_name.into();
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn with_handshake_complete(mut self, complete: bool) -> Self {
        self.handshake_complete = complete;
        self
    }

    #[must_use]
    pub fn with_did_resume(mut self, resumed: bool) -> Self {
        self.did_resume = resumed;
        self
    }

    #[must_use]
    pub fn with_cipher_suite(mut self, cipher_suite: u16) -> Self {
        self.cipher_suite = cipher_suite;
        self
    }
}

/// Render the request line:
/// `remote,server_name,version,handshake_complete,did_resume,cipher,success`
///
/// # Example
///
/// ```
/// use proxy_logger::tls::{format_request_line, ConnectionEvent, IanaCipherSuites};
///
/// let event = ConnectionEvent::new("1.2.3.4:55")
///     .with_server_name("api.example.com")
///     .with_version(0x0303)
///     .with_handshake_complete(true)
///     .with_cipher_suite(0x1301);
///
/// assert_eq!(
///     format_request_line(&event, &IanaCipherSuites),
///     "1.2.3.4:55,api.example.com,VersionTLS12,true,false,TLS_AES_128_GCM_SHA256,success"
/// );
/// ```
pub fn format_request_line(event: &ConnectionEvent, ciphers: &dyn CipherSuiteResolver) -> String {
    format!(
        "{},{},{},{},{},{}{}",
        event.remote_addr,
        event.server_name,
        tls_version_name(event.version),
        event.handshake_complete,
        event.did_resume,
        ciphers.name(event.cipher_suite),
        SUCCESS_MARKER,
    )
}

impl Logger {
    /// Log a completed request at info level, naming cipher suites with
    /// [`IanaCipherSuites`].
    pub fn log_request(&self, event: &ConnectionEvent) {
        self.log_request_with(event, &IanaCipherSuites);
    }

    /// Log a completed request at info level with a custom cipher suite
    /// resolver.
    pub fn log_request_with(&self, event: &ConnectionEvent, ciphers: &dyn CipherSuiteResolver) {
        if !self.is_enabled(LogLevel::Info) {
            self.metrics().record_filtered();
            return;
        }
        self.info(format_request_line(event, ciphers));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{classify, Outcome};
    use std::borrow::Cow;

    fn sample_event() -> ConnectionEvent {
        ConnectionEvent::new("1.2.3.4:55")
            .with_server_name("api.example.com")
            .with_version(0x0303)
            .with_handshake_complete(true)
            .with_did_resume(false)
            .with_cipher_suite(0x1301)
    }

    #[test]
    fn test_request_line() {
        assert_eq!(
            format_request_line(&sample_event(), &IanaCipherSuites),
            "1.2.3.4:55,api.example.com,VersionTLS12,true,false,TLS_AES_128_GCM_SHA256,success"
        );
    }

    #[test]
    fn test_request_line_without_sni() {
        let event = ConnectionEvent::new("[::1]:40022")
            .with_version(0x0304)
            .with_handshake_complete(true)
            .with_did_resume(true)
            .with_cipher_suite(0x1303);

        assert_eq!(
            format_request_line(&event, &IanaCipherSuites),
            "[::1]:40022,,VersionTLS13,true,true,TLS_CHACHA20_POLY1305_SHA256,success"
        );
    }

    #[test]
    fn test_request_line_unknown_codes() {
        let event = ConnectionEvent::new("10.0.0.1:1")
            .with_version(0x7f1c)
            .with_cipher_suite(0xfafa);

        assert_eq!(
            format_request_line(&event, &IanaCipherSuites),
            "10.0.0.1:1,,unknown,false,false,0xFAFA,success"
        );
    }

    #[test]
    fn test_custom_resolver() {
        struct Fixed;

        impl CipherSuiteResolver for Fixed {
            fn name(&self, _id: u16) -> Cow<'static, str> {
                Cow::Borrowed("AES128")
            }
        }

        let line = format_request_line(&sample_event(), &Fixed);
        assert!(line.ends_with(",AES128,success"));
    }

    #[test]
    fn test_request_line_classifies_as_success() {
        let (cleaned, outcome) = classify(&format_request_line(&sample_event(), &IanaCipherSuites));
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(
            cleaned,
            "1.2.3.4:55,api.example.com,VersionTLS12,true,false,TLS_AES_128_GCM_SHA256"
        );
    }
}
