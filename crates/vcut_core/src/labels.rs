//! Display labels for stream rows.
//!
//! Labels are built here as plain key/value lines so any front end can
//! style them (bold keys, separators) without knowing the stream model.

use crate::format::{decimal, parse_aspect_ratio, parse_frame_rate, sample_rate_khz};
use crate::language::language_title;
use crate::models::{AudioStream, SubtitleStream, VideoStream};

/// Shown in place of a value the probe reported in an unusable form.
pub const NOT_AVAILABLE: &str = "n/a";

/// One `key: value` pair of a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelField {
    pub key: &'static str,
    pub value: String,
}

impl LabelField {
    fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// A stream label: lines of fields, rendered top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamLabel {
    pub lines: Vec<Vec<LabelField>>,
}

impl StreamLabel {
    /// Value of the first field named `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.lines
            .iter()
            .flatten()
            .find(|field| field.key == key)
            .map(|field| field.value.as_str())
    }

    /// Plain-text rendering, one line per label line.
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|f| format!("{}: {}", f.key, f.value))
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Label for the video stream: codec, size, ratio, rate and color format.
pub fn video_label(stream: &VideoStream) -> StreamLabel {
    let ratio = match parse_aspect_ratio(&stream.display_aspect_ratio) {
        Ok(ratio) => decimal(ratio, 3),
        Err(e) => {
            tracing::warn!("Video stream {}: {}", stream.index, e);
            NOT_AVAILABLE.to_string()
        }
    };

    let rate = match parse_frame_rate(&stream.avg_frame_rate) {
        Ok(rate) => format!("{} fps", decimal(rate, 3)),
        Err(e) => {
            tracing::warn!("Video stream {}: {}", stream.index, e);
            NOT_AVAILABLE.to_string()
        }
    };

    StreamLabel {
        lines: vec![
            vec![LabelField::new("codec", stream.codec.as_str())],
            vec![
                LabelField::new("size", format!("{} x {}", stream.width, stream.height)),
                LabelField::new("ratio", ratio),
            ],
            vec![
                LabelField::new("rate", rate),
                LabelField::new("color", stream.pix_fmt.as_str()),
            ],
        ],
    }
}

/// Label for an audio stream.
///
/// With a language tag the label leads with the language title; without one
/// it shows codec, channels and sample rate only.
pub fn audio_label(stream: &AudioStream) -> StreamLabel {
    let specs = vec![
        LabelField::new(
            "channels",
            stream
                .channels
                .map_or_else(|| NOT_AVAILABLE.to_string(), |c| c.to_string()),
        ),
        LabelField::new(
            "rate",
            stream.sample_rate.map_or_else(
                || NOT_AVAILABLE.to_string(),
                |rate| format!("{} kHz", decimal(sample_rate_khz(rate), 1)),
            ),
        ),
    ];

    let lines = match &stream.language {
        Some(lang) => {
            let mut last = vec![LabelField::new("lang", lang.as_str())];
            last.extend(specs);
            vec![
                vec![LabelField::new("title", language_title(lang))],
                vec![LabelField::new("codec", stream.codec.as_str())],
                last,
            ]
        }
        None => vec![vec![LabelField::new("codec", stream.codec.as_str())], specs],
    };

    StreamLabel { lines }
}

/// Label for a subtitle stream: title, language and codec.
pub fn subtitle_label(stream: &SubtitleStream) -> StreamLabel {
    let codec = LabelField::new("codec", stream.codec.as_str());

    let lines = match &stream.language {
        Some(lang) => vec![
            vec![LabelField::new("title", language_title(lang))],
            vec![LabelField::new("lang", lang.as_str()), codec],
        ],
        None => vec![vec![codec]],
    };

    StreamLabel { lines }
}
