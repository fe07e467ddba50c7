//! Presentation interfaces.

use unitconv_core::UnitRegistry;

use crate::history::History;
use crate::record::ConversionRecord;

/// Trait for presenting conversion results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one conversion.
    fn present_result(&self, record: &ConversionRecord);

    /// Present the rolling history, newest first.
    fn present_history(&self, history: &History);

    /// Present the categories and units a registry offers.
    fn present_catalog(&self, registry: &dyn UnitRegistry);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Presenter that discards everything.
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_result(&self, _record: &ConversionRecord) {}
    fn present_history(&self, _history: &History) {}
    fn present_catalog(&self, _registry: &dyn UnitRegistry) {}
    fn present_error(&self, _error: &str) {}
}
