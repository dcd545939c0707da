//! Access outcomes derived from error-stream text
//!
//! HTTP servers and reverse proxies report problems by writing free text to
//! an error log. [`ErrorLogWriter`] stands in for that error log: each write
//! is classified by [`classify`] and re-emitted as an info record tagged
//! `result=success` or `result=denied`.

pub mod outcome;
pub mod writer;

pub use outcome::{classify, Classifier, MarkerMatch, Outcome, RESULT_KEY, SUCCESS_MARKER};
pub use writer::ErrorLogWriter;
