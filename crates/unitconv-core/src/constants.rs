//! Display and history constants shared by the presentation crates.

/// Number of decimal places used when displaying a converted value.
pub const DISPLAY_PRECISION: usize = 4;

/// Number of conversions kept in the rolling history.
pub const HISTORY_CAPACITY: usize = 5;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, terminal setup).
    pub const ERROR_GENERIC: i32 = 1;
    /// The conversion request was invalid (unknown category or unit).
    pub const ERROR_INVALID: i32 = 2;
}
