//! The built-in unit table.
//!
//! Linear factors are expressed relative to each category's base unit
//! (meters, grams, seconds, kph, bytes). Data sizes use decimal prefixes.
//! Temperature goes through Celsius.

use crate::category::Category;
use crate::unit::{AffineUnit, LinearUnit, UnitScale};

static DISTANCE: [LinearUnit; 6] = [
    LinearUnit::new("meters", 1.0),
    LinearUnit::new("kilometers", 0.001),
    LinearUnit::new("miles", 0.000_621_371),
    LinearUnit::new("yards", 1.093_61),
    LinearUnit::new("feet", 3.280_84),
    LinearUnit::new("inches", 39.3701),
];

static WEIGHT: [LinearUnit; 5] = [
    LinearUnit::new("grams", 1.0),
    LinearUnit::new("kilograms", 0.001),
    LinearUnit::new("pounds", 0.002_204_62),
    LinearUnit::new("ounces", 0.035_274),
    LinearUnit::new("tons", 0.000_001),
];

static TEMPERATURE: [AffineUnit; 3] = [
    AffineUnit::new("Celsius", celsius_to_base, celsius_from_base),
    AffineUnit::new("Fahrenheit", fahrenheit_to_base, fahrenheit_from_base),
    AffineUnit::new("Kelvin", kelvin_to_base, kelvin_from_base),
];

static TIME: [LinearUnit; 4] = [
    LinearUnit::new("seconds", 1.0),
    LinearUnit::new("minutes", 1.0 / 60.0),
    LinearUnit::new("hours", 1.0 / 3600.0),
    LinearUnit::new("days", 1.0 / 86_400.0),
];

// fps is kept at the historical 0.911344 rather than recomputed.
static SPEED: [LinearUnit; 4] = [
    LinearUnit::new("kph", 1.0),
    LinearUnit::new("mph", 0.621_371),
    LinearUnit::new("mps", 0.277_778),
    LinearUnit::new("fps", 0.911_344),
];

static DATA: [LinearUnit; 4] = [
    LinearUnit::new("bytes", 1.0),
    LinearUnit::new("kilobytes", 0.001),
    LinearUnit::new("megabytes", 1e-6),
    LinearUnit::new("gigabytes", 1e-9),
];

static DISTANCE_SCALE: UnitScale = UnitScale::Linear(&DISTANCE);
static WEIGHT_SCALE: UnitScale = UnitScale::Linear(&WEIGHT);
static TEMPERATURE_SCALE: UnitScale = UnitScale::Affine(&TEMPERATURE);
static TIME_SCALE: UnitScale = UnitScale::Linear(&TIME);
static SPEED_SCALE: UnitScale = UnitScale::Linear(&SPEED);
static DATA_SCALE: UnitScale = UnitScale::Linear(&DATA);

/// Scale of a built-in category.
pub(crate) fn scale(category: Category) -> &'static UnitScale {
    match category {
        Category::Distance => &DISTANCE_SCALE,
        Category::Weight => &WEIGHT_SCALE,
        Category::Temperature => &TEMPERATURE_SCALE,
        Category::Time => &TIME_SCALE,
        Category::Speed => &SPEED_SCALE,
        Category::Data => &DATA_SCALE,
    }
}

fn celsius_to_base(c: f64) -> f64 {
    c
}

fn celsius_from_base(c: f64) -> f64 {
    c
}

fn fahrenheit_to_base(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn fahrenheit_from_base(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn kelvin_to_base(k: f64) -> f64 {
    k - 273.15
}

fn kelvin_from_base(c: f64) -> f64 {
    c + 273.15
}
