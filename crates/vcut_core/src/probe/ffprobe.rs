//! ffprobe invocation and JSON mapping.

use std::fs;
use std::path::Path;
use std::process::Command;

use serde::Deserialize;

use super::types::{ProbeError, ProbeResult};
use crate::models::{AudioStream, StreamSet, SubtitleStream, VideoStream};

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    index: usize,
    #[serde(default)]
    codec_type: Option<String>,
    #[serde(default)]
    codec_name: Option<String>,
    #[serde(default)]
    codec_long_name: Option<String>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    pix_fmt: Option<String>,
    #[serde(default)]
    avg_frame_rate: Option<String>,
    #[serde(default)]
    display_aspect_ratio: Option<String>,
    #[serde(default)]
    channels: Option<u32>,
    /// ffprobe reports the sample rate as a string.
    #[serde(default)]
    sample_rate: Option<String>,
    #[serde(default)]
    tags: Option<FfprobeTags>,
    #[serde(default)]
    disposition: Option<FfprobeDisposition>,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeTags {
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeDisposition {
    #[serde(default)]
    attached_pic: u8,
}

impl FfprobeStream {
    fn codec(&self) -> String {
        self.codec_long_name
            .as_deref()
            .or(self.codec_name.as_deref())
            .unwrap_or("unknown")
            .to_string()
    }

    fn language(&self) -> Option<String> {
        self.tags
            .as_ref()
            .and_then(|t| t.language.as_deref())
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
    }

    fn is_attached_picture(&self) -> bool {
        self.disposition
            .as_ref()
            .is_some_and(|d| d.attached_pic != 0)
    }

    fn into_video(self) -> VideoStream {
        let width = self.width.unwrap_or(0);
        let height = self.height.unwrap_or(0);
        let display_aspect_ratio = self
            .display_aspect_ratio
            .clone()
            .unwrap_or_else(|| format!("{}:{}", width, height));

        VideoStream {
            index: self.index,
            codec: self.codec(),
            width,
            height,
            pix_fmt: self.pix_fmt.clone().unwrap_or_default(),
            avg_frame_rate: self.avg_frame_rate.clone().unwrap_or_else(|| "0/0".to_string()),
            display_aspect_ratio,
        }
    }

    fn into_audio(self) -> AudioStream {
        let sample_rate = self
            .sample_rate
            .as_deref()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|rate| *rate > 0);
        if sample_rate.is_none() {
            tracing::debug!(
                "Audio stream {}: unusable sample rate {:?}",
                self.index,
                self.sample_rate
            );
        }

        AudioStream {
            index: self.index,
            codec: self.codec(),
            channels: self.channels.filter(|c| *c > 0),
            sample_rate,
            language: self.language(),
        }
    }

    fn into_subtitle(self) -> SubtitleStream {
        SubtitleStream {
            index: self.index,
            codec: self.codec(),
            language: self.language(),
        }
    }
}

/// Run ffprobe on `path` and collect its streams.
///
/// `ffprobe` is the executable to run (a bare name is looked up on `PATH`).
pub fn probe_file(path: &Path, ffprobe: &str) -> ProbeResult<StreamSet> {
    if !path.exists() {
        return Err(ProbeError::FileNotFound(path.to_path_buf()));
    }

    tracing::debug!("Probing file: {}", path.display());

    let output = Command::new(ffprobe)
        .args(["-v", "error", "-show_streams", "-of", "json"])
        .arg(path)
        .output()
        .map_err(|source| ProbeError::Spawn {
            tool: ffprobe.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ProbeError::CommandFailed {
            tool: ffprobe.to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    parse_ffprobe_json(&String::from_utf8_lossy(&output.stdout))
}

/// Load previously saved ffprobe JSON output from `path`.
pub fn read_probe_json(path: &Path) -> ProbeResult<StreamSet> {
    if !path.exists() {
        return Err(ProbeError::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_ffprobe_json(&content)
}

/// Map ffprobe `-show_streams -of json` output onto a [`StreamSet`].
///
/// Only the first real video stream is kept; cover art (attached pictures)
/// and data/attachment streams are skipped.
pub fn parse_ffprobe_json(json: &str) -> ProbeResult<StreamSet> {
    let output: FfprobeOutput = serde_json::from_str(json)?;
    let mut set = StreamSet::default();

    for stream in output.streams {
        let codec_type = stream.codec_type.clone();
        match codec_type.as_deref() {
            Some("video") if stream.is_attached_picture() => {
                tracing::debug!("Skipping attached picture stream {}", stream.index);
            }
            Some("video") => {
                if set.video.is_none() {
                    set.video = Some(stream.into_video());
                } else {
                    tracing::debug!("Ignoring additional video stream {}", stream.index);
                }
            }
            Some("audio") => set.audio.push(stream.into_audio()),
            Some("subtitle") => set.subtitle.push(stream.into_subtitle()),
            other => {
                tracing::trace!("Skipping stream {} of type {:?}", stream.index, other);
            }
        }
    }

    tracing::info!(
        "Probed {} streams ({} audio, {} subtitle)",
        set.len(),
        set.audio.len(),
        set.subtitle.len()
    );

    Ok(set)
}
