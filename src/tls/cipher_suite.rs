//! Cipher suite name lookup

use std::borrow::Cow;

/// Resolves a negotiated cipher suite identifier to a display name.
///
/// Hosts whose TLS stack already knows the suite name (or names suites
/// differently) plug their own resolver into
/// [`Logger::log_request_with`](crate::Logger::log_request_with).
pub trait CipherSuiteResolver: Send + Sync {
    fn name(&self, id: u16) -> Cow<'static, str>;
}

/// IANA names for the suites a TLS 1.0-1.3 server can negotiate.
///
/// Unknown identifiers render as upper-case hex, e.g. `0x1305`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaCipherSuites;

// Sorted by id for binary search
const IANA_SUITES: &[(u16, &str)] = &[
    (0x0005, "TLS_RSA_WITH_RC4_128_SHA"),
    (0x000a, "TLS_RSA_WITH_3DES_EDE_CBC_SHA"),
    (0x002f, "TLS_RSA_WITH_AES_128_CBC_SHA"),
    (0x0035, "TLS_RSA_WITH_AES_256_CBC_SHA"),
    (0x003c, "TLS_RSA_WITH_AES_128_CBC_SHA256"),
    (0x009c, "TLS_RSA_WITH_AES_128_GCM_SHA256"),
    (0x009d, "TLS_RSA_WITH_AES_256_GCM_SHA384"),
    (0x1301, "TLS_AES_128_GCM_SHA256"),
    (0x1302, "TLS_AES_256_GCM_SHA384"),
    (0x1303, "TLS_CHACHA20_POLY1305_SHA256"),
    (0x5600, "TLS_FALLBACK_SCSV"),
    (0xc007, "TLS_ECDHE_ECDSA_WITH_RC4_128_SHA"),
    (0xc009, "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA"),
    (0xc00a, "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA"),
    (0xc011, "TLS_ECDHE_RSA_WITH_RC4_128_SHA"),
    (0xc012, "TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA"),
    (0xc013, "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA"),
    (0xc014, "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA"),
    (0xc023, "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256"),
    (0xc027, "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256"),
    (0xc02b, "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256"),
    (0xc02c, "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384"),
    (0xc02f, "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256"),
    (0xc030, "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384"),
    (0xcca8, "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256"),
    (0xcca9, "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256"),
];

impl IanaCipherSuites {
    /// Table lookup without the hex fallback
    pub fn lookup(id: u16) -> Option<&'static str> {
        IANA_SUITES
            .binary_search_by_key(&id, |&(suite, _)| suite)
            .ok()
            .map(|index| IANA_SUITES[index].1)
    }
}

impl CipherSuiteResolver for IanaCipherSuites {
    fn name(&self, id: u16) -> Cow<'static, str> {
        match Self::lookup(id) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("0x{:04X}", id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(IANA_SUITES.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_known_suites() {
        let resolver = IanaCipherSuites;
        assert_eq!(resolver.name(0x1301), "TLS_AES_128_GCM_SHA256");
        assert_eq!(resolver.name(0xc02f), "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256");
        assert_eq!(
            resolver.name(0xcca9),
            "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256"
        );
    }

    #[test]
    fn test_unknown_suite_renders_hex() {
        let resolver = IanaCipherSuites;
        assert_eq!(resolver.name(0x1305), "0x1305");
        assert_eq!(resolver.name(0xabcd), "0xABCD");
        assert_eq!(resolver.name(0x0000), "0x0000");
        assert!(IanaCipherSuites::lookup(0xabcd).is_none());
    }

    #[test]
    fn test_custom_resolver() {
        struct Numeric;

        impl CipherSuiteResolver for Numeric {
            fn name(&self, id: u16) -> Cow<'static, str> {
                Cow::Owned(id.to_string())
            }
        }

        assert_eq!(Numeric.name(4865), "4865");
    }
}
