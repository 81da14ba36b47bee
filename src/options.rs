//! Runtime options and verbosity levels.
//! There is deliberately no persisted configuration: the filesystem namespace
//! is the only state this tool manages, so everything arrives via flags.

use std::fmt;
use std::str::FromStr;

/// Per-invocation behavior switches for the mutating operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Print the intended actions but do not modify the filesystem.
    pub dry_run: bool,
    /// Emit a confirmation line on success or idempotent no-op.
    pub verbose: bool,
}

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors (default; keeps stdout clean for scripting)
    #[default]
    Normal,
    /// Informational output
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}
