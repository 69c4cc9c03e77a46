//! Shared CLI output helpers for consistent operator-facing text.

use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Print the tool name and version line.
pub fn header(version: &str) {
    println!("{} {version}", highlight("admix"));
}

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<18} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("✓ {message}");
}

/// Print a warning status line.
pub fn warn(message: &str) {
    println!("⚠ {message}");
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!("✗ {message}");
}

/// Bold a fragment when stdout supports color.
pub fn highlight(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.bold())
        .to_string()
}
