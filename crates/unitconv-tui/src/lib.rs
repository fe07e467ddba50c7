//! # unitconv-tui
//!
//! Interactive converter using ratatui with Elm architecture.

pub mod chart;
pub mod error;
pub mod footer;
pub mod form;
pub mod header;
pub mod history;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod styles;

pub use error::TuiError;
pub use messages::TuiMessage;
pub use model::{Field, TuiApp};
