//! # unitconv-cli
//!
//! CLI output formatting, styled printing, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CliPresenter;
