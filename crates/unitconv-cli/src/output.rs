//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;

use unitconv_core::DISPLAY_PRECISION;
use unitconv_session::ConversionRecord;

/// Format a converted value with the fixed display precision.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:.DISPLAY_PRECISION$}")
}

/// `"{input} {from} = {output} {to}"`, the output at display precision.
#[must_use]
pub fn format_conversion(record: &ConversionRecord) -> String {
    format!(
        "{} {} = {} {}",
        record.from_value,
        record.from_unit,
        format_value(record.to_value),
        record.to_unit
    )
}

/// One history line: `"{time}: {input} {from} -> {output} {to}"`.
#[must_use]
pub fn format_history_line(record: &ConversionRecord) -> String {
    format!(
        "{}: {} {} -> {} {}",
        record.time,
        record.from_value,
        record.from_unit,
        format_value(record.to_value),
        record.to_unit
    )
}

/// Serialize a record as a single JSON line.
pub fn format_json(record: &ConversionRecord) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

/// Write the converted value of a record to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: impl AsRef<Path>, record: &ConversionRecord) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", format_value(record.to_value))?;
    Ok(())
}
