// UI module for consistent terminal output
//
// Every line the operator sees goes through here; diagnostics go through `log`.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use console::style;

/// Print a success message with checkmark
pub fn success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print an info/action message with arrow
pub fn action(message: &str) {
    println!("{} {}", style("→").cyan(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

/// Print a dimmed/secondary message
pub fn dim(message: &str) {
    println!("{}", style(message).dim());
}

/// Print a plain line
pub fn plain(message: &str) {
    println!("{}", message);
}

/// Print a multi-line block to stderr, unstyled so it can be copied verbatim
pub fn banner(text: &str) {
    eprintln!("{}", text);
}
