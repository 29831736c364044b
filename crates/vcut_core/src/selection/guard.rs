//! Close guard: detect selections that drop all audio or all subtitles.

use serde::{Deserialize, Serialize};

use crate::models::{InclusionMap, StreamKind, StreamSet};

/// Header of the warning prompt.
pub const WARNING_TITLE: &str = "A friendly configuration warning";

/// Closing question of the warning prompt.
pub const WARNING_QUESTION: &str = "Are you sure this is what you want?";

/// How a stream kind with no streams counts when checking for muted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutePolicy {
    /// A kind is muted only if it has streams and none of them is kept.
    #[default]
    RequireStreams,
    /// A kind with no streams also counts as muted.
    Vacuous,
}

/// Which kinds of content the current selection would drop entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutedWarning {
    Audio,
    Subtitles,
    AudioAndSubtitles,
}

impl MutedWarning {
    /// Pick the warning for the given flags, or `None` if nothing is muted.
    pub fn from_flags(no_audio: bool, no_subtitles: bool) -> Option<Self> {
        match (no_audio, no_subtitles) {
            (true, false) => Some(MutedWarning::Audio),
            (false, true) => Some(MutedWarning::Subtitles),
            (true, true) => Some(MutedWarning::AudioAndSubtitles),
            (false, false) => None,
        }
    }

    /// Explanation shown in the warning prompt.
    pub fn message(&self) -> &'static str {
        match self {
            MutedWarning::Audio => {
                "All audio streams have been deselected which will produce a file with \
                 NO AUDIO when you save."
            }
            MutedWarning::Subtitles => {
                "All subtitle streams have been deselected which will produce a file with \
                 NO SUBTITLES when you save."
            }
            MutedWarning::AudioAndSubtitles => {
                "All audio and subtitle streams have been deselected which will produce a file \
                 with NO AUDIO and NO SUBTITLES when you save."
            }
        }
    }
}

/// Whether no stream of `kind` is kept.
///
/// Missing map entries count as not kept.
pub fn kind_muted(
    streams: &StreamSet,
    map: &InclusionMap,
    kind: StreamKind,
    policy: MutePolicy,
) -> bool {
    let indices = streams.indices(kind);
    if indices.is_empty() {
        return policy == MutePolicy::Vacuous;
    }
    !indices.iter().any(|index| map.is_included(*index))
}

/// Evaluate the close guard against the current selection.
pub fn check_close(
    streams: &StreamSet,
    map: &InclusionMap,
    policy: MutePolicy,
) -> Option<MutedWarning> {
    let no_audio = kind_muted(streams, map, StreamKind::Audio, policy);
    let no_subtitles = kind_muted(streams, map, StreamKind::Subtitle, policy);
    MutedWarning::from_flags(no_audio, no_subtitles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::stream_set;

    fn map_of(entries: &[(usize, bool)]) -> InclusionMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn all_audio_off_warns_audio() {
        let set = stream_set(2, 1);
        let map = map_of(&[(0, true), (1, false), (2, false), (3, true)]);
        assert_eq!(
            check_close(&set, &map, MutePolicy::RequireStreams),
            Some(MutedWarning::Audio)
        );
    }

    #[test]
    fn all_subtitles_off_warns_subtitles() {
        let set = stream_set(1, 2);
        let map = map_of(&[(0, true), (1, true), (2, false), (3, false)]);
        assert_eq!(
            check_close(&set, &map, MutePolicy::RequireStreams),
            Some(MutedWarning::Subtitles)
        );
    }

    #[test]
    fn both_off_gives_single_combined_warning() {
        let set = stream_set(1, 1);
        let map = map_of(&[(0, true), (1, false), (2, false)]);
        assert_eq!(
            check_close(&set, &map, MutePolicy::RequireStreams),
            Some(MutedWarning::AudioAndSubtitles)
        );
    }

    #[test]
    fn one_kept_stream_per_kind_is_enough() {
        let set = stream_set(2, 2);
        let map = map_of(&[(0, true), (1, false), (2, true), (3, true), (4, false)]);
        assert_eq!(check_close(&set, &map, MutePolicy::RequireStreams), None);
    }

    #[test]
    fn video_entry_does_not_count_as_audio() {
        let set = stream_set(1, 0);
        let map = map_of(&[(0, true), (1, false)]);
        assert!(kind_muted(&set, &map, StreamKind::Audio, MutePolicy::RequireStreams));
    }

    #[test]
    fn empty_kind_follows_policy() {
        let set = stream_set(2, 0);
        let map = map_of(&[(0, true), (1, true), (2, false)]);
        assert_eq!(check_close(&set, &map, MutePolicy::RequireStreams), None);
        assert_eq!(
            check_close(&set, &map, MutePolicy::Vacuous),
            Some(MutedWarning::Subtitles)
        );
    }

    #[test]
    fn missing_entry_counts_as_dropped() {
        let set = stream_set(1, 0);
        let map = map_of(&[(0, true)]);
        assert_eq!(
            check_close(&set, &map, MutePolicy::RequireStreams),
            Some(MutedWarning::Audio)
        );
    }

    #[test]
    fn messages_differ_per_case() {
        assert!(MutedWarning::Audio.message().contains("NO AUDIO"));
        assert!(!MutedWarning::Audio.message().contains("NO SUBTITLES"));
        assert!(MutedWarning::Subtitles.message().contains("NO SUBTITLES"));
        let both = MutedWarning::AudioAndSubtitles.message();
        assert!(both.contains("NO AUDIO") && both.contains("NO SUBTITLES"));
    }

    #[test]
    fn flags_map_to_cases() {
        assert_eq!(MutedWarning::from_flags(false, false), None);
        assert_eq!(
            MutedWarning::from_flags(true, false),
            Some(MutedWarning::Audio)
        );
        assert_eq!(
            MutedWarning::from_flags(false, true),
            Some(MutedWarning::Subtitles)
        );
        assert_eq!(
            MutedWarning::from_flags(true, true),
            Some(MutedWarning::AudioAndSubtitles)
        );
    }
}
