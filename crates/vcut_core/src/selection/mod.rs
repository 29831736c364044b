//! Stream selection: toggling streams and guarding the dialog close.
//!
//! This module provides:
//! - `StreamSelector`, the toolkit-independent model behind the dialog
//! - The close guard that warns before all audio and/or subtitles are dropped
//!
//! # Example
//!
//! ```
//! use vcut_core::models::{AudioStream, InclusionMap, StreamSet};
//! use vcut_core::selection::{CloseOutcome, MutedWarning, StreamSelector, WarningResponse};
//!
//! let streams = StreamSet {
//!     audio: vec![AudioStream {
//!         index: 1,
//!         codec: "AAC".into(),
//!         channels: Some(2),
//!         sample_rate: Some(48000),
//!         language: None,
//!     }],
//!     ..Default::default()
//! };
//! let mut map = InclusionMap::all_included(&streams);
//! let mut selector = StreamSelector::new(streams, &map).unwrap();
//!
//! selector.set_config(&mut map, 1, false);
//! assert_eq!(selector.request_close(&map), CloseOutcome::Prompt(MutedWarning::Audio));
//! assert!(!selector.respond(WarningResponse::No).closes());
//! ```

mod error;
mod guard;
mod selector;

pub use error::{SelectionError, SelectionResult};
pub use guard::{
    check_close, kind_muted, MutePolicy, MutedWarning, WARNING_QUESTION, WARNING_TITLE,
};
pub use selector::{
    CloseDecision, CloseOutcome, CloseState, StreamSelector, WarningResponse,
    DEFAULT_SCROLL_THRESHOLD,
};
