//! UI helpers for CLI display.

use console::{style, Style};

use unitconv_session::Rgb;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled section header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print a conversion result.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("=> {text}");
    } else {
        println!("{} {}", style("=>").green().bold(), style(text).bold());
    }
}

/// Print a history entry in its record color.
pub fn print_history_entry(text: &str, color: Rgb) {
    if is_color_disabled() {
        println!("  {text}");
    } else {
        let swatch = Style::new().color256(color.to_ansi256());
        println!("  {} {text}", swatch.apply_to("\u{25cf}"));
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("Error: {text}");
    } else {
        eprintln!("{} {text}", style("Error:").red().bold());
    }
}
