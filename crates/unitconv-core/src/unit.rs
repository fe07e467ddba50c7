//! Unit definitions and the per-category conversion strategy.
//!
//! A category is either entirely linear (every unit is a multiple of the
//! base unit) or entirely affine (every unit carries its own pair of
//! transforms to and from the base representation). The choice is made
//! once per category by the `UnitScale` variant, never per lookup.

/// A unit convertible to its category's base unit by a single factor.
///
/// `base = value / factor` and `value = base * factor`; the base unit has
/// factor 1. The factor must never be zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearUnit {
    pub name: &'static str,
    pub factor: f64,
}

impl LinearUnit {
    #[must_use]
    pub const fn new(name: &'static str, factor: f64) -> Self {
        Self { name, factor }
    }
}

/// A unit whose relation to the base representation has an offset.
#[derive(Debug, Clone, Copy)]
pub struct AffineUnit {
    pub name: &'static str,
    pub to_base: fn(f64) -> f64,
    pub from_base: fn(f64) -> f64,
}

impl AffineUnit {
    #[must_use]
    pub const fn new(
        name: &'static str,
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    ) -> Self {
        Self {
            name,
            to_base,
            from_base,
        }
    }
}

/// Conversion strategy and ordered unit set of one category.
#[derive(Debug, Clone, Copy)]
pub enum UnitScale {
    Linear(&'static [LinearUnit]),
    Affine(&'static [AffineUnit]),
}

impl UnitScale {
    /// Unit names in table order.
    #[must_use]
    pub fn unit_names(&self) -> Vec<&'static str> {
        match self {
            UnitScale::Linear(units) => units.iter().map(|u| u.name).collect(),
            UnitScale::Affine(units) => units.iter().map(|u| u.name).collect(),
        }
    }

    /// Whether `unit` belongs to this scale.
    #[must_use]
    pub fn contains(&self, unit: &str) -> bool {
        match self {
            UnitScale::Linear(units) => units.iter().any(|u| u.name == unit),
            UnitScale::Affine(units) => units.iter().any(|u| u.name == unit),
        }
    }

    /// The implicit reference unit of a linear scale (factor 1).
    ///
    /// Affine scales have no single base unit and return `None`.
    #[must_use]
    pub fn base_unit(&self) -> Option<&'static str> {
        match self {
            UnitScale::Linear(units) => units.iter().find(|u| u.factor == 1.0).map(|u| u.name),
            UnitScale::Affine(_) => None,
        }
    }

    /// Convert `value` from `source` to `target`.
    ///
    /// Returns the name of the first unit that is not part of the scale
    /// when either lookup fails.
    pub(crate) fn transform<'u>(
        &self,
        value: f64,
        source: &'u str,
        target: &'u str,
    ) -> Result<f64, &'u str> {
        match self {
            UnitScale::Linear(units) => {
                let from = find_linear(units, source).ok_or(source)?;
                let to = find_linear(units, target).ok_or(target)?;
                if from.name == to.name {
                    return Ok(value);
                }
                let base = value / from.factor;
                Ok(base * to.factor)
            }
            UnitScale::Affine(units) => {
                let from = find_affine(units, source).ok_or(source)?;
                let to = find_affine(units, target).ok_or(target)?;
                if from.name == to.name {
                    return Ok(value);
                }
                let base = (from.to_base)(value);
                Ok((to.from_base)(base))
            }
        }
    }
}

fn find_linear<'a>(units: &'a [LinearUnit], name: &str) -> Option<&'a LinearUnit> {
    units.iter().find(|u| u.name == name)
}

fn find_affine<'a>(units: &'a [AffineUnit], name: &str) -> Option<&'a AffineUnit> {
    units.iter().find(|u| u.name == name)
}
