//! Control-flow outcome of an emission
//!
//! Fatal and panic records end the program after they are written. Instead
//! of exiting from deep inside the logger, every emission returns an
//! [`Emission`] describing what should happen next, and the logger's
//! [`TerminalPolicy`] decides whether the logger acts on it or hands it back.

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Exit code used for fatal records
pub const FATAL_EXIT_CODE: i32 = 1;

/// What the caller must do after a record was emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// Keep going; every level below fatal
    Continue,
    /// Terminate the process with this exit code
    Exit { code: i32 },
    /// Raise a panic carrying the record's message
    Panic { message: String },
}

impl Emission {
    pub fn for_level(level: LogLevel, message: &str) -> Self {
        match level {
            LogLevel::Fatal => Emission::Exit {
                code: FATAL_EXIT_CODE,
            },
            LogLevel::Panic => Emission::Panic {
                message: message.to_string(),
            },
            _ => Emission::Continue,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Emission::Continue)
    }

    /// Carry out the outcome: exit, panic, or return for `Continue`.
    pub fn enforce(&self) {
        match self {
            Emission::Continue => {}
            Emission::Exit { code } => std::process::exit(*code),
            Emission::Panic { message } => panic!("{}", message),
        }
    }
}

/// Who acts on a terminal [`Emission`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalPolicy {
    /// The logger exits or panics right after writing the record
    #[default]
    Enforce,
    /// The emission is returned and the caller decides
    Defer,
}
