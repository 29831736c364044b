//! Per-stream keep/drop decisions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::streams::StreamSet;

/// Mapping from stream index to "keep this stream".
///
/// Owned by whoever opens the dialog. The dialog writes into it through a
/// mutable borrow and never takes a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InclusionMap(BTreeMap<usize, bool>);

impl InclusionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map with every stream of `streams` marked as kept.
    pub fn all_included(streams: &StreamSet) -> Self {
        Self::with_default(streams, true)
    }

    /// Map with every stream set to `keep`. The video stream is always kept.
    pub fn with_default(streams: &StreamSet, keep: bool) -> Self {
        let mut map = Self::new();
        if let Some(video) = &streams.video {
            map.set(video.index, true);
        }
        for (_, index) in streams.selectable_indices() {
            map.set(index, keep);
        }
        map
    }

    /// Current decision for `index`, or `None` if the map has no entry.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(&index).copied()
    }

    /// Whether `index` is kept. A missing entry counts as not kept.
    pub fn is_included(&self, index: usize) -> bool {
        self.get(index).unwrap_or(false)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains_key(&index)
    }

    /// Write a decision, replacing any previous one.
    pub fn set(&mut self, index: usize, keep: bool) {
        self.0.insert(index, keep);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.0.iter().map(|(index, keep)| (*index, *keep))
    }

    /// Indices that are kept, in index order.
    pub fn included(&self) -> Vec<usize> {
        self.iter().filter(|(_, keep)| *keep).map(|(i, _)| i).collect()
    }
}

impl FromIterator<(usize, bool)> for InclusionMap {
    fn from_iter<T: IntoIterator<Item = (usize, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
