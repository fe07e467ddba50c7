//! # unitconv-core
//!
//! Core library for the unitconv converter.
//! Converts values between units of one category using either a linear
//! factor table or a pair of affine functions (temperature).

pub mod category;
pub mod constants;
pub mod engine;
pub mod error;
pub mod registry;
pub(crate) mod table;
pub mod unit;

// Re-exports
pub use category::Category;
pub use constants::{exit_codes, DISPLAY_PRECISION, HISTORY_CAPACITY};
pub use engine::{convert, convert_with, try_convert, ConversionRequest};
pub use error::ConvertError;
pub use registry::{StandardRegistry, UnitRegistry};
pub use unit::{AffineUnit, LinearUnit, UnitScale};
