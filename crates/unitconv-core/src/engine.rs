//! The conversion engine.
//!
//! `convert` resolves the category, looks up both units, and applies the
//! category's scale. It reads only the immutable unit table and never
//! mutates anything, so it can be called from any thread.

use crate::category::Category;
use crate::error::ConvertError;
use crate::registry::{StandardRegistry, UnitRegistry};

/// A single conversion request. Consumed synchronously, never retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest<'a> {
    pub category: &'a str,
    pub source_unit: &'a str,
    pub target_unit: &'a str,
    pub value: f64,
}

impl<'a> ConversionRequest<'a> {
    #[must_use]
    pub fn new(category: &'a str, source_unit: &'a str, target_unit: &'a str, value: f64) -> Self {
        Self {
            category,
            source_unit,
            target_unit,
            value,
        }
    }

    /// Run the request against the built-in table.
    pub fn execute(&self) -> Result<f64, ConvertError> {
        convert_with(&StandardRegistry, self)
    }
}

/// Convert `value` from `source_unit` to `target_unit` within `category`.
///
/// # Example
/// ```
/// let f = unitconv_core::convert(0.0, "Celsius", "Fahrenheit", "Temperature").unwrap();
/// assert_eq!(f, 32.0);
/// assert!(unitconv_core::convert(1.0, "meters", "feet", "Volume").is_err());
/// ```
pub fn convert(
    value: f64,
    source_unit: &str,
    target_unit: &str,
    category: &str,
) -> Result<f64, ConvertError> {
    ConversionRequest::new(category, source_unit, target_unit, value).execute()
}

/// Like [`convert`], with every failure collapsed into `None`.
#[must_use]
pub fn try_convert(
    value: f64,
    source_unit: &str,
    target_unit: &str,
    category: &str,
) -> Option<f64> {
    convert(value, source_unit, target_unit, category).ok()
}

/// Run `request` against an arbitrary registry.
pub fn convert_with(
    registry: &dyn UnitRegistry,
    request: &ConversionRequest<'_>,
) -> Result<f64, ConvertError> {
    let category: Category = request.category.parse().inspect_err(|_| {
        tracing::debug!(category = request.category, "rejected: unknown category");
    })?;
    let scale = registry
        .scale(category)
        .ok_or_else(|| ConvertError::UnknownCategory(request.category.to_string()))?;

    match scale.transform(request.value, request.source_unit, request.target_unit) {
        Ok(output) => {
            tracing::debug!(
                %category,
                from = request.source_unit,
                to = request.target_unit,
                input = request.value,
                output,
                "converted"
            );
            Ok(output)
        }
        Err(unit) => {
            tracing::debug!(%category, unit, "rejected: unit not in category");
            Err(ConvertError::UnknownUnit {
                unit: unit.to_string(),
                category,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_to_fahrenheit() {
        assert_eq!(
            convert(0.0, "Celsius", "Fahrenheit", "Temperature"),
            Ok(32.0)
        );
        assert_eq!(
            convert(100.0, "Celsius", "Fahrenheit", "Temperature"),
            Ok(212.0)
        );
    }

    #[test]
    fn celsius_to_kelvin() {
        assert_eq!(convert(100.0, "Celsius", "Kelvin", "Temperature"), Ok(373.15));
    }

    #[test]
    fn fahrenheit_to_kelvin() {
        let k = convert(212.0, "Fahrenheit", "Kelvin", "Temperature").unwrap();
        assert!((k - 373.15).abs() < 1e-9);
    }

    #[test]
    fn kilometers_to_miles() {
        let miles = convert(1.0, "kilometers", "miles", "Distance").unwrap();
        assert!((miles - 0.621_371).abs() < 1e-6);
    }

    #[test]
    fn grams_to_kilograms() {
        assert_eq!(convert(1000.0, "grams", "kilograms", "Weight"), Ok(1.0));
    }

    #[test]
    fn minutes_to_hours() {
        assert_eq!(convert(60.0, "minutes", "hours", "Time"), Ok(1.0));
    }

    #[test]
    fn kph_to_mph() {
        let mph = convert(100.0, "kph", "mph", "Speed").unwrap();
        assert!((mph - 62.1371).abs() < 1e-4);
    }

    #[test]
    fn data_is_decimal() {
        let kb = convert(1000.0, "bytes", "kilobytes", "Data").unwrap();
        assert!((kb - 1.0).abs() < 1e-12);
        let mb = convert(1.0, "gigabytes", "megabytes", "Data").unwrap();
        assert!((mb - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_category() {
        assert_eq!(
            convert(1.0, "meters", "feet", "NotACategory"),
            Err(ConvertError::UnknownCategory("NotACategory".into()))
        );
    }

    #[test]
    fn unknown_source_unit() {
        assert_eq!(
            convert(1.0, "NotAUnit", "feet", "Distance"),
            Err(ConvertError::UnknownUnit {
                unit: "NotAUnit".into(),
                category: Category::Distance,
            })
        );
    }

    #[test]
    fn unknown_target_unit() {
        let err = convert(1.0, "meters", "grams", "Distance").unwrap_err();
        assert!(matches!(err, ConvertError::UnknownUnit { ref unit, .. } if unit == "grams"));
    }

    #[test]
    fn same_unit_checks_membership() {
        assert!(convert(1.0, "furlongs", "furlongs", "Distance").is_err());
    }

    #[test]
    fn try_convert_collapses_errors() {
        assert_eq!(try_convert(60.0, "seconds", "minutes", "Time"), Some(1.0));
        assert_eq!(try_convert(1.0, "seconds", "minutes", "Duration"), None);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(convert(f64::NAN, "meters", "feet", "Distance")
            .unwrap()
            .is_nan());
        assert_eq!(
            convert(f64::INFINITY, "kph", "mph", "Speed"),
            Ok(f64::INFINITY)
        );
    }

    #[test]
    fn negative_values() {
        assert_eq!(
            convert(-40.0, "Celsius", "Fahrenheit", "Temperature"),
            Ok(-40.0)
        );
    }

    #[test]
    fn request_execute() {
        let request = ConversionRequest::new("Data", "megabytes", "bytes", 2.0);
        let bytes = request.execute().unwrap();
        assert!((bytes - 2_000_000.0).abs() < 1e-6);
    }
}
