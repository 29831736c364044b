//! vcut core - Backend logic for the media streams dialog
//!
//! This crate contains the stream model, the inclusion map, display
//! formatting and the close guard with zero UI dependencies. It can be
//! driven by the iced dialog or by any other front end.

pub mod config;
pub mod format;
pub mod labels;
pub mod language;
pub mod logging;
pub mod models;
pub mod probe;
pub mod selection;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
