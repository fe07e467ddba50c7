//! # unitconv-session
//!
//! Presentation-side state around the engine: conversion records, the
//! bounded history they are kept in, and the presenter interface.

pub mod history;
pub mod interfaces;
pub mod record;
pub mod session;

pub use history::History;
pub use interfaces::ResultPresenter;
pub use record::{ConversionRecord, Rgb};
pub use session::Session;
