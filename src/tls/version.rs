//! TLS protocol version names

use std::fmt;

/// Name reported for any code outside the known versions
pub const UNKNOWN_VERSION: &str = "unknown";

/// Protocol versions a handshake can negotiate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TlsVersion {
    Ssl30,
    Tls10,
    Tls11,
    Tls12,
    Tls13,
}

impl TlsVersion {
    pub const ALL: [TlsVersion; 5] = [
        TlsVersion::Ssl30,
        TlsVersion::Tls10,
        TlsVersion::Tls11,
        TlsVersion::Tls12,
        TlsVersion::Tls13,
    ];

    /// Decode a wire version code
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            0x0300 => Some(TlsVersion::Ssl30),
            0x0301 => Some(TlsVersion::Tls10),
            0x0302 => Some(TlsVersion::Tls11),
            0x0303 => Some(TlsVersion::Tls12),
            0x0304 => Some(TlsVersion::Tls13),
            _ => None,
        }
    }

    pub const fn code(self) -> u16 {
        match self {
            TlsVersion::Ssl30 => 0x0300,
            TlsVersion::Tls10 => 0x0301,
            TlsVersion::Tls11 => 0x0302,
            TlsVersion::Tls12 => 0x0303,
            TlsVersion::Tls13 => 0x0304,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TlsVersion::Ssl30 => "VersionSSL30",
            TlsVersion::Tls10 => "VersionTLS10",
            TlsVersion::Tls11 => "VersionTLS11",
            TlsVersion::Tls12 => "VersionTLS12",
            TlsVersion::Tls13 => "VersionTLS13",
        }
    }
}

impl fmt::Display for TlsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u16> for TlsVersion {
    type Error = u16;

    fn try_from(code: u16) -> std::result::Result<Self, Self::Error> {
        TlsVersion::from_code(code).ok_or(code)
    }
}

/// Canonical name of a TLS version code; `"unknown"` for anything else.
///
/// # Example
///
/// ```
/// use proxy_logger::tls::tls_version_name;
///
/// assert_eq!(tls_version_name(0x0303), "VersionTLS12");
/// assert_eq!(tls_version_name(0x0305), "unknown");
/// ```
pub const fn tls_version_name(code: u16) -> &'static str {
    match TlsVersion::from_code(code) {
        Some(version) => version.name(),
        None => UNKNOWN_VERSION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_versions() {
        assert_eq!(tls_version_name(0x0300), "VersionSSL30");
        assert_eq!(tls_version_name(0x0301), "VersionTLS10");
        assert_eq!(tls_version_name(0x0302), "VersionTLS11");
        assert_eq!(tls_version_name(0x0303), "VersionTLS12");
        assert_eq!(tls_version_name(0x0304), "VersionTLS13");
    }

    #[test]
    fn test_unknown_versions() {
        for code in [0x0000, 0x0002, 0x02ff, 0x0305, 0x7f1c, 0xfefd, 0xffff] {
            assert_eq!(tls_version_name(code), "unknown", "code {:#06x}", code);
        }
    }

    #[test]
    fn test_code_round_trip() {
        for version in TlsVersion::ALL {
            assert_eq!(TlsVersion::from_code(version.code()), Some(version));
        }
        assert_eq!(TlsVersion::try_from(0x0200), Err(0x0200));
    }

    #[test]
    fn test_ordering_follows_protocol_age() {
        assert!(TlsVersion::Ssl30 < TlsVersion::Tls10);
        assert!(TlsVersion::Tls12 < TlsVersion::Tls13);
    }
}
