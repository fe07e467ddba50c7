//! TUI error type.

use std::io;

/// Errors raised by the interactive UI.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// Terminal setup, drawing, or event reading failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// The value field does not hold a number.
    #[error("not a number: '{0}'")]
    InvalidNumber(String),
}

/// Parse the value field. An empty field means zero.
pub fn parse_value(input: &str) -> Result<f64, TuiError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse()
        .map_err(|_| TuiError::InvalidNumber(trimmed.to_string()))
}
