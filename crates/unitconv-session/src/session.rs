//! Conversion session: runs requests through the engine and records them.

use std::sync::Arc;

use unitconv_core::{
    convert_with, Category, ConversionRequest, ConvertError, StandardRegistry, UnitRegistry,
};

use crate::history::History;
use crate::record::ConversionRecord;

/// Owns the registry used for conversions and the history of their results.
pub struct Session {
    registry: Arc<dyn UnitRegistry>,
    history: History,
}

impl Session {
    /// Session over the built-in unit table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Arc::new(StandardRegistry::new()))
    }

    #[must_use]
    pub fn with_registry(registry: Arc<dyn UnitRegistry>) -> Self {
        Self {
            registry,
            history: History::new(),
        }
    }

    /// Convert and, on success, append the result to the history.
    ///
    /// Rejected requests are returned as errors and never recorded.
    pub fn convert(
        &mut self,
        request: &ConversionRequest<'_>,
    ) -> Result<ConversionRecord, ConvertError> {
        let category: Category = request.category.parse()?;
        let to_value = convert_with(self.registry.as_ref(), request).inspect_err(|e| {
            tracing::info!(error = %e, "conversion rejected");
        })?;

        let record = ConversionRecord::now(
            category,
            request.value,
            request.source_unit,
            to_value,
            request.target_unit,
        );
        if let Some(evicted) = self.history.push(record.clone()) {
            tracing::debug!(time = %evicted.time, "history full, dropped oldest record");
        }
        Ok(record)
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    #[must_use]
    pub fn registry(&self) -> &dyn UnitRegistry {
        self.registry.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
