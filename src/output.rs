//! User-facing message lines, kept separate from the tracing log stream.
//! Colors are applied only when the destination stream is a TTY.

use owo_colors::{AnsiColors, OwoColorize};

/// Print a prefixed line, colored when the target stream is a terminal.
/// Warnings and errors go to stderr; the rest to stdout.
fn prefixed(prefix: &str, color: AnsiColors, msg: &str, to_stderr: bool) {
    let tty = atty::is(if to_stderr {
        atty::Stream::Stderr
    } else {
        atty::Stream::Stdout
    });
    let line = if tty {
        format!("{} {}", prefix.color(color).bold(), msg)
    } else {
        format!("{} {}", prefix, msg)
    };
    if to_stderr {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn print_info(msg: &str) {
    prefixed("info:", AnsiColors::Cyan, msg, false);
}

pub fn print_warn(msg: &str) {
    prefixed("warn:", AnsiColors::Yellow, msg, true);
}

pub fn print_error(msg: &str) {
    prefixed("error:", AnsiColors::Red, msg, true);
}

pub fn print_success(msg: &str) {
    prefixed("ok:", AnsiColors::Green, msg, false);
}

/// Plain line with no prefix. Used for the outputs users script against:
/// `DRY-RUN:` action lines and the `status` report.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
