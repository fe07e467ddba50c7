//! Conversion error type.

use crate::category::Category;

/// The single failure kind of the engine: the request is invalid.
///
/// The variant records why, so callers can show a diagnostic without
/// validating the request themselves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The category name is not recognized.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The unit is not a member of the category's unit set.
    #[error("unknown unit '{unit}' for category {category}")]
    UnknownUnit { unit: String, category: Category },
}

impl ConvertError {
    /// Every `ConvertError` means the request was invalid.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        true
    }
}
