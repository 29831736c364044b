//! Stream selector model and close protocol.

use std::collections::HashSet;
use std::path::Path;

use crate::models::{InclusionMap, StreamKind, StreamSet};

use super::error::{SelectionError, SelectionResult};
use super::guard::{check_close, MutePolicy, MutedWarning};

/// Sections with more streams than this scroll instead of growing.
pub const DEFAULT_SCROLL_THRESHOLD: usize = 2;

/// Where the close protocol currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseState {
    /// No close request is being handled.
    #[default]
    Unchecked,
    /// A close request is held until the user answers the warning.
    AwaitingConfirmation(MutedWarning),
}

/// Result of a close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Nothing is muted; the dialog may close.
    Close,
    /// The user must confirm this warning first.
    Prompt(MutedWarning),
}

/// User answer to the warning prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningResponse {
    Yes,
    No,
}

/// What the dialog does after the user answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Close,
    StayOpen,
}

impl CloseDecision {
    pub fn closes(&self) -> bool {
        *self == CloseDecision::Close
    }
}

/// Toolkit-independent model behind the stream dialog.
///
/// Holds the probed streams and the close state. The inclusion map stays
/// with the caller and is passed in by reference on every operation.
#[derive(Debug, Clone)]
pub struct StreamSelector {
    streams: StreamSet,
    media_name: String,
    policy: MutePolicy,
    scroll_threshold: usize,
    state: CloseState,
}

impl StreamSelector {
    /// Create a selector for `streams`.
    ///
    /// Every audio and subtitle stream must already have an entry in `map`;
    /// the selector never creates entries on its own.
    pub fn new(streams: StreamSet, map: &InclusionMap) -> SelectionResult<Self> {
        let mut seen = HashSet::new();
        for index in streams
            .video
            .iter()
            .map(|v| v.index)
            .chain(streams.selectable_indices().map(|(_, i)| i))
        {
            if !seen.insert(index) {
                return Err(SelectionError::DuplicateIndex(index));
            }
        }

        for (kind, index) in streams.selectable_indices() {
            if !map.contains(index) {
                return Err(SelectionError::MissingEntry { kind, index });
            }
        }

        tracing::debug!(
            "Stream selector created: {} audio, {} subtitle, video={}",
            streams.audio.len(),
            streams.subtitle.len(),
            streams.video.is_some()
        );

        Ok(Self {
            streams,
            media_name: String::new(),
            policy: MutePolicy::default(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            state: CloseState::Unchecked,
        })
    }

    /// Use the file name of `path` in the window title.
    pub fn with_media_path(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.media_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self
    }

    pub fn with_policy(mut self, policy: MutePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_scroll_threshold(mut self, threshold: usize) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    pub fn streams(&self) -> &StreamSet {
        &self.streams
    }

    pub fn state(&self) -> CloseState {
        self.state
    }

    pub fn policy(&self) -> MutePolicy {
        self.policy
    }

    /// Warning awaiting an answer, if any.
    pub fn pending_warning(&self) -> Option<MutedWarning> {
        match self.state {
            CloseState::AwaitingConfirmation(warning) => Some(warning),
            CloseState::Unchecked => None,
        }
    }

    /// Window title: "Media streams - <file name>".
    pub fn title(&self) -> String {
        if self.media_name.is_empty() {
            "Media streams".to_string()
        } else {
            format!("Media streams - {}", self.media_name)
        }
    }

    /// Sections to show, in order. Kinds without streams get no section.
    pub fn sections(&self) -> Vec<StreamKind> {
        self.streams.present_kinds()
    }

    /// Whether the section for `kind` scrolls rather than sizing to content.
    pub fn is_scrollable(&self, kind: StreamKind) -> bool {
        match kind {
            StreamKind::Video => false,
            StreamKind::Audio | StreamKind::Subtitle => {
                self.streams.count(kind) > self.scroll_threshold
            }
        }
    }

    /// Record the checkbox state for `index`.
    ///
    /// Unconditional write; repeated identical writes have no further effect.
    pub fn set_config(&self, map: &mut InclusionMap, index: usize, checked: bool) {
        tracing::debug!("Stream {} included={}", index, checked);
        map.set(index, checked);
    }

    /// Handle a close request (OK button or window close).
    pub fn request_close(&mut self, map: &InclusionMap) -> CloseOutcome {
        if let CloseState::AwaitingConfirmation(warning) = self.state {
            return CloseOutcome::Prompt(warning);
        }

        match check_close(&self.streams, map, self.policy) {
            None => {
                tracing::debug!("Close request accepted");
                CloseOutcome::Close
            }
            Some(warning) => {
                tracing::info!("Close held for confirmation: {:?}", warning);
                self.state = CloseState::AwaitingConfirmation(warning);
                CloseOutcome::Prompt(warning)
            }
        }
    }

    /// Apply the user's answer to a pending warning.
    pub fn respond(&mut self, response: WarningResponse) -> CloseDecision {
        if self.state == CloseState::Unchecked {
            tracing::warn!("Warning response {:?} with no pending close", response);
            return CloseDecision::StayOpen;
        }

        self.state = CloseState::Unchecked;
        match response {
            WarningResponse::Yes => {
                tracing::info!("Muted output confirmed, closing");
                CloseDecision::Close
            }
            WarningResponse::No => {
                tracing::debug!("Close cancelled");
                CloseDecision::StayOpen
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{audio, stream_set, video};

    fn map_of(entries: &[(usize, bool)]) -> InclusionMap {
        entries.iter().copied().collect()
    }

    /// 1 video, 2 audio streams at indices 1 and 2, no subtitles.
    fn two_audio() -> StreamSet {
        StreamSet {
            video: Some(video(0)),
            audio: vec![audio(1, Some("eng")), audio(2, Some("fre"))],
            subtitle: Vec::new(),
        }
    }

    #[test]
    fn missing_entry_rejected() {
        let err = StreamSelector::new(two_audio(), &map_of(&[(1, true)])).unwrap_err();
        assert_eq!(
            err,
            SelectionError::MissingEntry {
                kind: StreamKind::Audio,
                index: 2
            }
        );
    }

    #[test]
    fn video_entry_not_required() {
        assert!(StreamSelector::new(two_audio(), &map_of(&[(1, true), (2, false)])).is_ok());
    }

    #[test]
    fn duplicate_index_rejected() {
        let mut set = two_audio();
        set.audio[1].index = 1;
        let err = StreamSelector::new(set, &map_of(&[(1, true)])).unwrap_err();
        assert_eq!(err, SelectionError::DuplicateIndex(1));
    }

    #[test]
    fn toggle_touches_only_target() {
        let mut map = map_of(&[(1, true), (2, false)]);
        let selector = StreamSelector::new(two_audio(), &map).unwrap();

        selector.set_config(&mut map, 1, false);
        assert_eq!(map, map_of(&[(1, false), (2, false)]));

        selector.set_config(&mut map, 1, false);
        assert_eq!(map, map_of(&[(1, false), (2, false)]));
    }

    #[test]
    fn untoggling_last_audio_prompts() {
        let mut map = map_of(&[(1, true), (2, false)]);
        let mut selector = StreamSelector::new(two_audio(), &map).unwrap();

        selector.set_config(&mut map, 1, false);
        assert_eq!(
            selector.request_close(&map),
            CloseOutcome::Prompt(MutedWarning::Audio)
        );
        assert_eq!(
            selector.state(),
            CloseState::AwaitingConfirmation(MutedWarning::Audio)
        );
    }

    #[test]
    fn one_kept_audio_closes_without_prompt() {
        let map = map_of(&[(1, true), (2, false)]);
        let mut selector = StreamSelector::new(two_audio(), &map).unwrap();

        assert_eq!(selector.request_close(&map), CloseOutcome::Close);
        assert_eq!(selector.state(), CloseState::Unchecked);
    }

    #[test]
    fn answering_no_keeps_dialog_and_map() {
        let map = map_of(&[(1, false), (2, false)]);
        let before = map.clone();
        let mut selector = StreamSelector::new(two_audio(), &map).unwrap();

        selector.request_close(&map);
        assert_eq!(selector.respond(WarningResponse::No), CloseDecision::StayOpen);
        assert_eq!(selector.state(), CloseState::Unchecked);
        assert_eq!(map, before);

        // Next close is evaluated afresh.
        assert_eq!(
            selector.request_close(&map),
            CloseOutcome::Prompt(MutedWarning::Audio)
        );
    }

    #[test]
    fn answering_yes_closes() {
        let map = map_of(&[(1, false), (2, false)]);
        let mut selector = StreamSelector::new(two_audio(), &map).unwrap();

        selector.request_close(&map);
        assert!(selector.respond(WarningResponse::Yes).closes());
        assert_eq!(selector.pending_warning(), None);
    }

    #[test]
    fn repeated_close_while_prompting_shows_one_prompt() {
        let map = map_of(&[(1, false), (2, false)]);
        let mut selector = StreamSelector::new(two_audio(), &map).unwrap();

        let first = selector.request_close(&map);
        let second = selector.request_close(&map);
        assert_eq!(first, second);
        assert_eq!(selector.pending_warning(), Some(MutedWarning::Audio));
    }

    #[test]
    fn response_without_prompt_is_ignored() {
        let map = map_of(&[(1, true), (2, true)]);
        let mut selector = StreamSelector::new(two_audio(), &map).unwrap();
        assert_eq!(selector.respond(WarningResponse::Yes), CloseDecision::StayOpen);
    }

    #[test]
    fn scroll_threshold_is_more_than_two() {
        let set = stream_set(3, 2);
        let map = InclusionMap::all_included(&set);
        let selector = StreamSelector::new(set, &map).unwrap();
        assert!(selector.is_scrollable(StreamKind::Audio));
        assert!(!selector.is_scrollable(StreamKind::Subtitle));
        assert!(!selector.is_scrollable(StreamKind::Video));
    }

    #[test]
    fn title_uses_file_name() {
        let map = map_of(&[(1, true), (2, true)]);
        let selector = StreamSelector::new(two_audio(), &map)
            .unwrap()
            .with_media_path("/videos/holiday/clip.mkv");
        assert_eq!(selector.title(), "Media streams - clip.mkv");
    }

    #[test]
    fn sections_skip_empty_kinds() {
        let map = map_of(&[(1, true), (2, true)]);
        let selector = StreamSelector::new(two_audio(), &map).unwrap();
        assert_eq!(selector.sections(), vec![StreamKind::Video, StreamKind::Audio]);
    }

    #[test]
    fn vacuous_policy_prompts_without_subtitles() {
        let map = map_of(&[(1, true), (2, true)]);
        let mut selector = StreamSelector::new(two_audio(), &map)
            .unwrap()
            .with_policy(MutePolicy::Vacuous);
        assert_eq!(
            selector.request_close(&map),
            CloseOutcome::Prompt(MutedWarning::Subtitles)
        );
    }
}
