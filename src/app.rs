//! Application orchestrator.
//! Initializes logging, expands the raw path, dispatches the requested
//! operation, and renders outcomes and errors for the user.

use anyhow::Result;
use tracing::{debug, error};

use crate::cli::{Cli, Command};
use crate::errors::NosyncError;
use crate::fs_ops::{self, EntryPair, Outcome, StatusReport};
use crate::logging::init_tracing;
use crate::marker::NOSYNC_SUFFIX;
use crate::output as out;
use crate::paths::{default_log_path, expand_path};

/// Run the CLI application.
pub fn run(cli: Cli) -> Result<()> {
    // Best-effort file logging: explicit --log-file wins, else the data-dir
    // default. Refusals downgrade to stderr-only inside init_tracing.
    let log_file = cli.log_file.clone().or_else(default_log_path);
    // Guard must live until exit so the file appender flushes.
    let _guard = init_tracing(&cli.effective_log_level(), log_file.as_deref()).map_err(|e| {
        out::print_error(&format!("failed to initialize logging: {}", e));
        e
    })?;

    let opts = cli.options();
    debug!(?cli, "starting nosync");

    match &cli.command {
        Command::Exclude { path } => {
            let abs = expand_path(path).map_err(|e| fail("exclude", e))?;
            let pair = EntryPair::from_path(&abs).map_err(|e| fail("exclude", e))?;
            let outcome = fs_ops::exclude(&abs, &opts).map_err(|e| fail("exclude", e))?;
            if opts.verbose {
                match outcome {
                    Outcome::Transitioned => out::print_success(&format!(
                        "excluded: {} -> {} (symlink created)",
                        pair.logical_path.display(),
                        pair.marked_name
                    )),
                    Outcome::AlreadyInTarget => out::print_info(&format!(
                        "already excluded: {}",
                        pair.logical_path.display()
                    )),
                    Outcome::DryRun => {}
                }
            }
            Ok(())
        }
        Command::Restore { path } => {
            let abs = expand_path(path).map_err(|e| fail("restore", e))?;
            let pair = EntryPair::from_path(&abs).map_err(|e| fail("restore", e))?;
            let outcome = fs_ops::restore(&abs, &opts).map_err(|e| fail("restore", e))?;
            if opts.verbose {
                match outcome {
                    Outcome::Transitioned => out::print_success(&format!(
                        "restored: {} (symlink removed, directory renamed back)",
                        pair.logical_path.display()
                    )),
                    Outcome::AlreadyInTarget => out::print_info(&format!(
                        "already restored: no symlink and no {} directory",
                        NOSYNC_SUFFIX
                    )),
                    Outcome::DryRun => {}
                }
            }
            Ok(())
        }
        Command::Status { path, json } => {
            let abs = expand_path(path).map_err(|e| fail("status", e))?;
            let report = fs_ops::inspect(&abs).map_err(|e| fail("status", e))?;
            render_status(&report, *json)
        }
    }
}

/// Report a typed failure: structured log fields plus a colored stderr line.
fn fail(op: &'static str, e: NosyncError) -> anyhow::Error {
    error!(code = e.code(), kind = e.kind(), op, error = %e, "operation failed");
    out::print_error(&e.to_string());
    anyhow::Error::new(e)
}

fn render_status(report: &StatusReport, json: bool) -> Result<()> {
    if json {
        out::print_user(&serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    if let Some(target) = &report.symlink_target {
        out::print_user(&format!(
            "SYMLINK: {} -> {}",
            report.logical_path.display(),
            target.display()
        ));
    }
    if report.real_is_marked {
        out::print_user(&format!(
            "REAL: {} (excluded from the sync scan via {} suffix)",
            report.marked_path.display(),
            NOSYNC_SUFFIX
        ));
    } else {
        out::print_user(&format!(
            "REAL: {} (no {} suffix)",
            report.logical_path.display(),
            NOSYNC_SUFFIX
        ));
    }
    out::print_user(&format!("STATE: {}", report.state));
    Ok(())
}
