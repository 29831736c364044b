//! Data models for probed streams and stream selections.

mod inclusion;
mod streams;

pub use inclusion::InclusionMap;
pub use streams::{AudioStream, StreamKind, StreamSet, SubtitleStream, VideoStream};

#[cfg(test)]
pub(crate) use streams::fixtures;
