//! Unit registry: the one table shared by the engine and its callers.
//!
//! Presentation code enumerates categories and units through a registry
//! instead of keeping its own copy, so the two can never drift apart.

use crate::category::Category;
use crate::table;
use crate::unit::UnitScale;

/// Source of categories and their unit scales.
pub trait UnitRegistry: Send + Sync {
    /// Scale for `category`, or `None` if this registry does not serve it.
    fn scale(&self, category: Category) -> Option<&UnitScale>;

    /// Categories served by this registry, in display order.
    fn categories(&self) -> Vec<Category>;

    /// Unit names of `category` in display order (empty if not served).
    fn units(&self, category: Category) -> Vec<&'static str> {
        self.scale(category)
            .map(UnitScale::unit_names)
            .unwrap_or_default()
    }
}

/// Registry backed by the built-in unit table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRegistry;

impl StandardRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl UnitRegistry for StandardRegistry {
    fn scale(&self, category: Category) -> Option<&UnitScale> {
        Some(table::scale(category))
    }

    fn categories(&self) -> Vec<Category> {
        Category::ALL.to_vec()
    }
}
