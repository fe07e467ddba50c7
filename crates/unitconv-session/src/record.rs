//! Conversion records.

use rand::Rng;
use serde::{Deserialize, Serialize};

use unitconv_core::Category;

/// Display color of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pick a random color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    /// Nearest entry in the 6x6x6 color cube of the 256-color palette.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_ansi256(self) -> u8 {
        let level = |c: u8| (u16::from(c) * 5 / 255) as u8;
        16 + 36 * level(self.r) + 6 * level(self.g) + level(self.b)
    }
}

/// One successful conversion, as kept in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Local time of day, `HH:MM:SS`.
    pub time: String,
    pub category: Category,
    pub from_value: f64,
    pub from_unit: String,
    pub to_value: f64,
    pub to_unit: String,
    pub color: Rgb,
}

impl ConversionRecord {
    /// Stamp a record with the current local time and a random color.
    #[must_use]
    pub fn now(
        category: Category,
        from_value: f64,
        from_unit: &str,
        to_value: f64,
        to_unit: &str,
    ) -> Self {
        Self {
            time: chrono::Local::now().format("%H:%M:%S").to_string(),
            category,
            from_value,
            from_unit: from_unit.to_string(),
            to_value,
            to_unit: to_unit.to_string(),
            color: Rgb::random(&mut rand::thread_rng()),
        }
    }
}
