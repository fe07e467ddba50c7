//! Application configuration from CLI flags and environment.

use clap::Parser;

use unitconv_core::{Category, UnitRegistry};

/// Convert values between units of one category.
#[derive(Parser, Debug)]
#[command(name = "unitconv", version, about)]
pub struct AppConfig {
    /// Category: Distance, Weight, Temperature, Time, Speed or Data.
    #[arg(short = 'C', long, default_value = "Distance", env = "UNITCONV_CATEGORY")]
    pub category: String,

    /// Source unit (defaults to the first unit of the category).
    #[arg(short, long)]
    pub from: Option<String>,

    /// Target unit (defaults to the first unit of the category).
    #[arg(short, long)]
    pub to: Option<String>,

    /// Values to convert.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Quiet mode (only output the converted numbers).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print each record as a JSON line.
    #[arg(long)]
    pub json: bool,

    /// Print the rolling history after converting.
    #[arg(long)]
    pub history: bool,

    /// Write the last converted value to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// List categories and their units.
    #[arg(long)]
    pub list: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Values to convert; a bare invocation converts zero.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        if self.values.is_empty() {
            vec![0.0]
        } else {
            self.values.clone()
        }
    }

    /// Source and target units, filling omitted ones from `registry`.
    ///
    /// An unknown category leaves omitted units empty; the engine reports
    /// the category itself.
    #[must_use]
    pub fn resolve_units(&self, registry: &dyn UnitRegistry) -> (String, String) {
        let first = self
            .category
            .parse::<Category>()
            .ok()
            .and_then(|c| registry.units(c).first().copied())
            .unwrap_or_default();
        let pick = |unit: Option<&str>| unit.unwrap_or(first).to_string();
        (pick(self.from.as_deref()), pick(self.to.as_deref()))
    }
}
