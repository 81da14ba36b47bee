//! CLI definition and parsing.
//! Defines the subcommands and global flags and provides parse().

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::options::{LogLevel, Options};

/// CLI wrapper for the nosync library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Exclude folders from a cloud-sync scan (.nosync rename + symlink)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Dry-run: print intended actions but do not modify the filesystem.
    #[arg(
        long,
        global = true,
        help = "Show what would be done, but do not modify the filesystem"
    )]
    pub dry_run: bool,

    /// Print a confirmation line on success or idempotent no-op.
    #[arg(
        short,
        long,
        global = true,
        help = "Print a confirmation line on success or no-op"
    )]
    pub verbose: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append logs to this file in addition to stderr.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        help = "Append logs to a file in addition to stderr"
    )]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Exclude a folder from the sync scan (.nosync rename + symlink)")]
    Exclude {
        #[arg(value_name = "PATH", value_hint = ValueHint::DirPath)]
        path: PathBuf,
    },

    #[command(about = "Restore sync for a folder (remove symlink, rename back)")]
    Restore {
        #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath)]
        path: PathBuf,
    },

    #[command(about = "Show the on-disk state for a folder (symlink and real path)")]
    Status {
        #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath)]
        path: PathBuf,
        #[arg(long, help = "Emit the report as JSON")]
        json: bool,
    },
}

impl Cli {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > default (normal).
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or_default()
    }

    /// Per-invocation options handed to the mutating operations.
    pub fn options(&self) -> Options {
        Options {
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
