//! Status messages on stderr.
//!
//! Command results go to stdout uncolored so they can be piped; everything
//! here is for the person at the terminal.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;

static COLORS: AtomicBool = AtomicBool::new(true);

/// Enable or disable colors for status messages.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color, Ordering::Relaxed);
}

fn colors() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub fn warning(message: &str) {
    if colors() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {message}");
    }
}

/// Pluralize `noun` for `count` ("1 file", "3 files").
pub fn count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
