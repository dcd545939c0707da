//! Success/denied classification of raw log lines

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trailing text that marks a line as a successful access
pub const SUCCESS_MARKER: &str = ",success";

/// Field carrying the outcome on re-emitted records
pub const RESULT_KEY: &str = "result";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Denied,
}

impl Outcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Denied => "denied",
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the success marker is located in a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerMatch {
    /// The marker may appear anywhere in the line. Only a trailing marker
    /// is removed from the message.
    #[default]
    Anywhere,
    /// The marker must end the line (a single trailing `'\n'` is ignored).
    /// A line that merely mentions `,success` in the middle is denied.
    TrailingSuffix,
}

/// Splits raw lines into a cleaned message and an [`Outcome`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    marker_match: MarkerMatch,
}

impl Classifier {
    pub const fn new(marker_match: MarkerMatch) -> Self {
        Self { marker_match }
    }

    /// Classifier that only accepts the marker at the end of the line
    pub const fn trailing_suffix() -> Self {
        Self::new(MarkerMatch::TrailingSuffix)
    }

    pub const fn marker_match(&self) -> MarkerMatch {
        self.marker_match
    }

    pub fn classify<'a>(&self, raw: &'a str) -> (&'a str, Outcome) {
        match self.marker_match {
            MarkerMatch::Anywhere => {
                if raw.contains(SUCCESS_MARKER) {
                    let cleaned = raw.strip_suffix(SUCCESS_MARKER).unwrap_or(raw);
                    (cleaned, Outcome::Success)
                } else {
                    (strip_newline(raw), Outcome::Denied)
                }
            }
            MarkerMatch::TrailingSuffix => {
                let line = strip_newline(raw);
                match line.strip_suffix(SUCCESS_MARKER) {
                    Some(cleaned) => (cleaned, Outcome::Success),
                    None => (line, Outcome::Denied),
                }
            }
        }
    }
}

fn strip_newline(raw: &str) -> &str {
    raw.strip_suffix('\n').unwrap_or(raw)
}

/// Classify a raw log line.
///
/// A line containing `,success` is a success, with a trailing `,success`
/// removed. Any other line is denied, with one trailing newline removed.
///
/// # Example
///
/// ```
/// use proxy_logger::access::{classify, Outcome};
///
/// assert_eq!(
///     classify("10.0.0.1,site,TLS13,true,false,AES128,success"),
///     ("10.0.0.1,site,TLS13,true,false,AES128".to_string(), Outcome::Success)
/// );
/// assert_eq!(classify("access denied\n"), ("access denied".to_string(), Outcome::Denied));
/// ```
pub fn classify(raw: &str) -> (String, Outcome) {
    let (cleaned, outcome) = Classifier::default().classify(raw);
    (cleaned.to_string(), outcome)
}
