//! CLI result presenter.

use serde_json::json;

use unitconv_core::UnitRegistry;
use unitconv_session::{ConversionRecord, History, ResultPresenter};

use crate::output::{format_conversion, format_history_line, format_json, format_value};
use crate::ui::{print_error, print_header, print_history_entry, print_success};

/// CLI result presenter.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        Self {
            verbose,
            quiet,
            json,
        }
    }
}

impl ResultPresenter for CliPresenter {
    fn present_result(&self, record: &ConversionRecord) {
        if self.json {
            match format_json(record) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::warn!(error = %e, "could not serialize record"),
            }
            return;
        }

        if self.quiet {
            println!("{}", format_value(record.to_value));
            return;
        }

        print_success(&format_conversion(record));
        if self.verbose {
            println!("  Category: {}", record.category);
            println!("  Raw result: {}", record.to_value);
            println!("  Recorded at: {}", record.time);
        }
    }

    fn present_history(&self, history: &History) {
        if self.json {
            let entries: Vec<&ConversionRecord> = history.recent().collect();
            match serde_json::to_string(&entries) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::warn!(error = %e, "could not serialize history"),
            }
            return;
        }

        if !self.quiet {
            print_header(&format!(
                "History ({} of {})",
                history.len(),
                history.capacity()
            ));
        }
        for record in history.recent() {
            print_history_entry(&format_history_line(record), record.color);
        }
    }

    fn present_catalog(&self, registry: &dyn UnitRegistry) {
        if self.json {
            let catalog: Vec<_> = registry
                .categories()
                .into_iter()
                .map(|c| json!({ "category": c, "units": registry.units(c) }))
                .collect();
            println!("{}", serde_json::Value::Array(catalog));
            return;
        }

        for category in registry.categories() {
            let units = registry.units(category).join(", ");
            if self.quiet {
                println!("{category}: {units}");
            } else {
                print_header(category.name());
                println!("  {units}");
            }
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_core::{Category, StandardRegistry};
    use unitconv_session::Rgb;

    fn record() -> ConversionRecord {
        ConversionRecord {
            time: "08:00:00".into(),
            category: Category::Temperature,
            from_value: 0.0,
            from_unit: "Celsius".into(),
            to_value: 32.0,
            to_unit: "Fahrenheit".into(),
            color: Rgb::new(200, 100, 50),
        }
    }

    fn history() -> History {
        let mut history = History::new();
        for _ in 0..3 {
            history.push(record());
        }
        history
    }

    #[test]
    fn presenter_modes() {
        let presenter = CliPresenter::new(true, false, false);
        assert!(presenter.verbose);
        assert!(!presenter.quiet);
        assert!(!presenter.json);
    }

    #[test]
    fn present_result_every_mode() {
        for (verbose, quiet, json) in [
            (false, false, false),
            (true, false, false),
            (false, true, false),
            (false, false, true),
        ] {
            CliPresenter::new(verbose, quiet, json).present_result(&record());
        }
    }

    #[test]
    fn present_history_every_mode() {
        let history = history();
        CliPresenter::new(false, false, false).present_history(&history);
        CliPresenter::new(false, true, false).present_history(&history);
        CliPresenter::new(false, false, true).present_history(&history);
    }

    #[test]
    fn present_empty_history() {
        CliPresenter::new(false, false, false).present_history(&History::new());
    }

    #[test]
    fn present_catalog_every_mode() {
        let registry = StandardRegistry::new();
        CliPresenter::new(false, false, false).present_catalog(&registry);
        CliPresenter::new(false, true, false).present_catalog(&registry);
        CliPresenter::new(false, false, true).present_catalog(&registry);
    }

    #[test]
    fn present_error() {
        let presenter = CliPresenter::new(false, false, false);
        presenter.present_error("unknown category: Volume");
        presenter.present_error("");
    }
}
