//! Leveled emission API shared by [`Logger`] and [`Entry`]
//!
//! Every level comes in three flavours:
//! - plain: `info("message")`
//! - formatted: `infof(format_args!("{} bytes", n))`
//! - line-joined: `infoln(["upstream", "closed", "early"])`, parts joined
//!   with a single space
//!
//! All of them return the [`Emission`] of the record. Below fatal it is
//! always [`Emission::Continue`].

use super::emission::Emission;
use super::log_context::{FieldValue, Fields};
use super::log_level::LogLevel;
use super::logger::Logger;
use std::fmt;

pub(crate) fn join_parts<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    parts
        .into_iter()
        .map(|part| part.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

macro_rules! leveled {
    ($level:expr, $name:literal, $plain:ident, $formatted:ident, $joined:ident) => {
        #[doc = concat!("Emit a `", $name, "` record")]
        #[inline]
        fn $plain(&self, message: impl Into<String>) -> Emission {
            self.log($level, message.into())
        }

        #[doc = concat!("Emit a `", $name, "` record built from format arguments")]
        #[inline]
        fn $formatted(&self, args: fmt::Arguments<'_>) -> Emission {
            self.log($level, fmt::format(args))
        }

        #[doc = concat!("Emit a `", $name, "` record from parts joined by spaces")]
        #[inline]
        fn $joined<I>(&self, parts: I) -> Emission
        where
            I: IntoIterator,
            I::Item: fmt::Display,
        {
            self.log($level, join_parts(parts))
        }
    };
}

/// Leveled emission.
///
/// Implementors only provide [`Emitter::log`]; the per-level methods are
/// derived from it.
pub trait Emitter {
    /// Emit one record at `level`.
    ///
    /// Fatal and panic records follow the logger's terminal policy: with
    /// [`TerminalPolicy::Enforce`](super::TerminalPolicy::Enforce) this call
    /// does not return for them.
    fn log(&self, level: LogLevel, message: String) -> Emission;

    leveled!(LogLevel::Trace, "trace", trace, tracef, traceln);
    leveled!(LogLevel::Debug, "debug", debug, debugf, debugln);
    leveled!(LogLevel::Info, "info", info, infof, infoln);
    leveled!(LogLevel::Warn, "warning", warn, warnf, warnln);
    leveled!(LogLevel::Error, "error", error, errorf, errorln);
    leveled!(LogLevel::Fatal, "fatal", fatal, fatalf, fatalln);
    leveled!(LogLevel::Panic, "panic", panic, panicf, panicln);
}

impl Emitter for Logger {
    fn log(&self, level: LogLevel, message: String) -> Emission {
        self.dispatch(level, message, None)
    }
}

/// Emitter carrying extra fields on top of the logger's bound ones.
///
/// Created by [`Logger::with_field`] / [`Logger::with_fields`]. Extra
/// fields override bound fields with the same key, and only apply to
/// records emitted through this entry.
#[derive(Clone)]
pub struct Entry<'a> {
    logger: &'a Logger,
    fields: Fields,
}

impl<'a> Entry<'a> {
    pub(crate) fn new(logger: &'a Logger, fields: Fields) -> Self {
        Self { logger, fields }
    }

    /// Derive a new entry with one more field; `self` stays usable
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Entry<'a>
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Entry::new(self.logger, self.fields.clone().with_field(key, value))
    }

    /// Derive a new entry with more fields; `self` stays usable
    #[must_use]
    pub fn with_fields(&self, fields: Fields) -> Entry<'a> {
        Entry::new(self.logger, self.fields.merged_with(&fields))
    }

    /// Extra fields of this entry (without the logger's bound fields)
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn logger(&self) -> &'a Logger {
        self.logger
    }
}

impl Emitter for Entry<'_> {
    fn log(&self, level: LogLevel, message: String) -> Emission {
        self.logger.dispatch(level, message, Some(&self.fields))
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry").field("fields", &self.fields).finish()
    }
}
