//! Measurement categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// A measurement domain with its own closed set of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Distance,
    Weight,
    Temperature,
    Time,
    Speed,
    Data,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Distance,
        Category::Weight,
        Category::Temperature,
        Category::Time,
        Category::Speed,
        Category::Data,
    ];

    /// The category's display name. Also the only accepted spelling when parsing.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Distance => "Distance",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
            Category::Speed => "Speed",
            Category::Data => "Data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ConvertError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_name() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("distance".parse::<Category>().is_err());
        assert!("TEMPERATURE".parse::<Category>().is_err());
    }

    #[test]
    fn parse_unknown() {
        let err = "NotACategory".parse::<Category>().unwrap_err();
        assert_eq!(err, ConvertError::UnknownCategory("NotACategory".into()));
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Category::Speed.to_string(), "Speed");
        assert_eq!(format!("{}", Category::Data), "Data");
    }

    #[test]
    fn serde_uses_variant_name() {
        let json = serde_json::to_string(&Category::Temperature).unwrap();
        assert_eq!(json, "\"Temperature\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Temperature);
    }
}
