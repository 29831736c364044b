//! Probed stream metadata grouped by kind.

use serde::{Deserialize, Serialize};

/// Kind of elementary stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
}

impl StreamKind {
    /// Section heading shown in the dialog.
    pub fn heading(&self) -> &'static str {
        match self {
            StreamKind::Video => "Video",
            StreamKind::Audio => "Audio",
            StreamKind::Subtitle => "Subtitles",
        }
    }
}

impl std::fmt::Display for StreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamKind::Video => write!(f, "video"),
            StreamKind::Audio => write!(f, "audio"),
            StreamKind::Subtitle => write!(f, "subtitle"),
        }
    }
}

/// The video stream of a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStream {
    /// Stream index within the container.
    pub index: usize,
    /// Codec display name.
    pub codec: String,
    pub width: u32,
    pub height: u32,
    /// Pixel format (e.g. "yuv420p").
    pub pix_fmt: String,
    /// Average frame rate as a fraction (e.g. "30000/1001").
    pub avg_frame_rate: String,
    /// Display aspect ratio as "W:H".
    pub display_aspect_ratio: String,
}

/// An audio stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioStream {
    pub index: usize,
    pub codec: String,
    /// Channel count; `None` when the probe did not report a usable one.
    pub channels: Option<u32>,
    /// Sample rate in Hz; `None` when missing or unparseable.
    pub sample_rate: Option<u32>,
    /// ISO 639-2 language tag, if the container carries one.
    pub language: Option<String>,
}

/// A subtitle stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleStream {
    pub index: usize,
    pub codec: String,
    pub language: Option<String>,
}

/// Streams of one container, grouped by kind in container order.
///
/// Only the first video stream is kept; it is always included in the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamSet {
    #[serde(default)]
    pub video: Option<VideoStream>,
    #[serde(default)]
    pub audio: Vec<AudioStream>,
    #[serde(default)]
    pub subtitle: Vec<SubtitleStream>,
}

impl StreamSet {
    /// Total number of streams.
    pub fn len(&self) -> usize {
        usize::from(self.video.is_some()) + self.audio.len() + self.subtitle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of streams of the given kind.
    pub fn count(&self, kind: StreamKind) -> usize {
        match kind {
            StreamKind::Video => usize::from(self.video.is_some()),
            StreamKind::Audio => self.audio.len(),
            StreamKind::Subtitle => self.subtitle.len(),
        }
    }

    /// Stream indices of the given kind, in container order.
    pub fn indices(&self, kind: StreamKind) -> Vec<usize> {
        match kind {
            StreamKind::Video => self.video.iter().map(|v| v.index).collect(),
            StreamKind::Audio => self.audio.iter().map(|a| a.index).collect(),
            StreamKind::Subtitle => self.subtitle.iter().map(|s| s.index).collect(),
        }
    }

    /// Indices of the streams the user can toggle (audio then subtitles).
    pub fn selectable_indices(&self) -> impl Iterator<Item = (StreamKind, usize)> + '_ {
        let audio = self.audio.iter().map(|a| (StreamKind::Audio, a.index));
        let subtitle = self.subtitle.iter().map(|s| (StreamKind::Subtitle, s.index));
        audio.chain(subtitle)
    }

    /// Kind of the stream with the given index.
    pub fn kind_of(&self, index: usize) -> Option<StreamKind> {
        if self.video.as_ref().is_some_and(|v| v.index == index) {
            return Some(StreamKind::Video);
        }
        if self.audio.iter().any(|a| a.index == index) {
            return Some(StreamKind::Audio);
        }
        if self.subtitle.iter().any(|s| s.index == index) {
            return Some(StreamKind::Subtitle);
        }
        None
    }

    /// Kinds that have at least one stream, in dialog order.
    pub fn present_kinds(&self) -> Vec<StreamKind> {
        [StreamKind::Video, StreamKind::Audio, StreamKind::Subtitle]
            .into_iter()
            .filter(|kind| self.count(*kind) > 0)
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn video(index: usize) -> VideoStream {
        VideoStream {
            index,
            codec: "H.264 / AVC / MPEG-4 AVC / MPEG-4 part 10".to_string(),
            width: 1920,
            height: 1080,
            pix_fmt: "yuv420p".to_string(),
            avg_frame_rate: "30000/1001".to_string(),
            display_aspect_ratio: "16:9".to_string(),
        }
    }

    pub fn audio(index: usize, language: Option<&str>) -> AudioStream {
        AudioStream {
            index,
            codec: "AAC (Advanced Audio Coding)".to_string(),
            channels: Some(2),
            sample_rate: Some(48000),
            language: language.map(str::to_string),
        }
    }

    pub fn subtitle(index: usize, language: Option<&str>) -> SubtitleStream {
        SubtitleStream {
            index,
            codec: "SubRip subtitle".to_string(),
            language: language.map(str::to_string),
        }
    }

    /// One video stream at index 0 followed by `audio` and `subtitles` streams.
    pub fn stream_set(audio_count: usize, subtitle_count: usize) -> StreamSet {
        let mut next = 1;
        let mut set = StreamSet {
            video: Some(video(0)),
            ..Default::default()
        };
        for _ in 0..audio_count {
            set.audio.push(audio(next, Some("eng")));
            next += 1;
        }
        for _ in 0..subtitle_count {
            set.subtitle.push(subtitle(next, Some("eng")));
            next += 1;
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn counts_streams_by_kind() {
        let set = stream_set(2, 3);
        assert_eq!(set.len(), 6);
        assert_eq!(set.count(StreamKind::Video), 1);
        assert_eq!(set.count(StreamKind::Audio), 2);
        assert_eq!(set.count(StreamKind::Subtitle), 3);
        assert!(!set.is_empty());
        assert!(StreamSet::default().is_empty());
    }

    #[test]
    fn finds_kind_of_index() {
        let set = stream_set(1, 1);
        assert_eq!(set.kind_of(0), Some(StreamKind::Video));
        assert_eq!(set.kind_of(1), Some(StreamKind::Audio));
        assert_eq!(set.kind_of(2), Some(StreamKind::Subtitle));
        assert_eq!(set.kind_of(9), None);
    }

    #[test]
    fn present_kinds_skips_empty_groups() {
        let mut set = stream_set(2, 0);
        assert_eq!(set.present_kinds(), vec![StreamKind::Video, StreamKind::Audio]);

        set.video = None;
        assert_eq!(set.present_kinds(), vec![StreamKind::Audio]);
    }

    #[test]
    fn selectable_indices_exclude_video() {
        let set = stream_set(2, 1);
        let indices: Vec<_> = set.selectable_indices().collect();
        assert_eq!(
            indices,
            vec![
                (StreamKind::Audio, 1),
                (StreamKind::Audio, 2),
                (StreamKind::Subtitle, 3),
            ]
        );
    }
}
