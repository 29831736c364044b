//! Dialog views.

pub mod stream_selector;
pub mod warning;
