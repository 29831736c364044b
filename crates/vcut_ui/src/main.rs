//! vcut-streams - Main entry point
//!
//! Launches the media streams dialog with iced. It handles:
//! - Configuration loading
//! - Application-level logging initialization
//! - Probing the media file for its streams
//! - Printing the final keep/drop map on exit

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context;
use clap::Parser;

use vcut_core::config::ConfigManager;
use vcut_core::labels::{audio_label, subtitle_label, video_label};
use vcut_core::logging::{init_tracing, init_tracing_with_file, LogLevel};
use vcut_core::models::{InclusionMap, StreamKind, StreamSet};
use vcut_core::probe::{probe_file, read_probe_json};
use vcut_core::selection::StreamSelector;

mod app;
mod handlers;
mod icons;
mod theme;
mod windows;

use app::AppInit;
use theme::ThemeKind;

/// Choose which streams of a media file to keep.
#[derive(Parser, Debug)]
#[command(name = "vcut-streams", version, about)]
struct Args {
    /// Media file to inspect
    file: PathBuf,

    /// Read saved `ffprobe -show_streams -of json` output instead of running ffprobe
    #[arg(long, value_name = "PATH")]
    probe_json: Option<PathBuf>,

    /// Theme override
    #[arg(long, value_parser = ["light", "dark"])]
    theme: Option<String>,

    /// Start with this stream index deselected (repeatable)
    #[arg(long = "exclude", value_name = "INDEX")]
    exclude: Vec<usize>,

    /// Settings file
    #[arg(long, default_value = ".config/settings.toml")]
    config: PathBuf,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration first (needed for logs directory path)
    let mut config_manager = ConfigManager::new(&args.config);
    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }
    let settings = config_manager.settings().clone();
    let log_level = args.log_level.unwrap_or(settings.logging.level);

    let _log_guard = if settings.logging.file_logging {
        if let Err(e) = config_manager.ensure_dirs_exist() {
            eprintln!("Warning: Failed to create directories: {}", e);
        }
        Some(init_tracing_with_file(log_level, config_manager.logs_folder()))
    } else {
        init_tracing(log_level);
        None
    };

    tracing::info!("vcut-streams starting");
    tracing::info!("Config: {}", config_manager.path().display());
    tracing::info!("Core version: {}", vcut_core::version());

    let streams = load_streams(&args, &settings.streams.ffprobe_path)?;
    tracing::info!(
        "{}: {} audio, {} subtitle streams",
        args.file.display(),
        streams.count(StreamKind::Audio),
        streams.count(StreamKind::Subtitle)
    );
    log_streams(&streams);

    let map = initial_map(&streams, settings.streams.include_by_default, &args.exclude);

    let selector = StreamSelector::new(streams, &map)
        .context("Invalid initial stream selection")?
        .with_media_path(&args.file)
        .with_policy(settings.streams.mute_policy())
        .with_scroll_threshold(settings.streams.scroll_threshold);

    let theme = ThemeKind::from_name(args.theme.as_deref().unwrap_or(&settings.appearance.theme));
    tracing::debug!("Theme: {}", theme.name());

    // Shared with the dialog, read back once it closes
    let inclusion = Arc::new(Mutex::new(map));

    app::run(AppInit {
        selector,
        inclusion: Arc::clone(&inclusion),
        theme,
    })
    .context("Dialog failed")?;

    let map = inclusion
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    tracing::info!("Keeping streams {:?}", map.included());

    println!(
        "{}",
        serde_json::to_string_pretty(&map).context("Failed to serialize selection")?
    );
    Ok(())
}

fn load_streams(args: &Args, ffprobe: &str) -> anyhow::Result<StreamSet> {
    match &args.probe_json {
        Some(path) => read_probe_json(path)
            .with_context(|| format!("Failed to read probe output {}", path.display())),
        None => probe_file(&args.file, ffprobe)
            .with_context(|| format!("Failed to probe {}", args.file.display())),
    }
}

/// Log each probed stream with its dialog label.
fn log_streams(streams: &StreamSet) {
    if let Some(video) = &streams.video {
        tracing::debug!("Video stream {}\n{}", video.index, video_label(video).to_plain_text());
    }
    for audio in &streams.audio {
        tracing::debug!("Audio stream {}\n{}", audio.index, audio_label(audio).to_plain_text());
    }
    for sub in &streams.subtitle {
        tracing::debug!(
            "Subtitle stream {}\n{}",
            sub.index,
            subtitle_label(sub).to_plain_text()
        );
    }
}

/// Default every stream, then apply `--exclude`.
fn initial_map(streams: &StreamSet, include_by_default: bool, exclude: &[usize]) -> InclusionMap {
    let mut map = InclusionMap::with_default(streams, include_by_default);

    for &index in exclude {
        match streams.kind_of(index) {
            Some(StreamKind::Audio | StreamKind::Subtitle) => map.set(index, false),
            Some(StreamKind::Video) => {
                tracing::warn!("Ignoring --exclude {}: the video stream is always kept", index)
            }
            None => tracing::warn!("Ignoring --exclude {}: no such stream", index),
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcut_core::models::{AudioStream, SubtitleStream};

    fn streams() -> StreamSet {
        StreamSet {
            video: None,
            audio: vec![AudioStream {
                index: 1,
                codec: "AC3".into(),
                channels: Some(6),
                sample_rate: Some(48000),
                language: None,
            }],
            subtitle: vec![SubtitleStream {
                index: 2,
                codec: "ASS".into(),
                language: Some("jpn".into()),
            }],
        }
    }

    #[test]
    fn exclude_deselects_known_streams_only() {
        let map = initial_map(&streams(), true, &[2, 9]);
        assert_eq!(map.get(1), Some(true));
        assert_eq!(map.get(2), Some(false));
        assert!(!map.contains(9));
    }

    #[test]
    fn include_by_default_false_starts_empty_selection() {
        let map = initial_map(&streams(), false, &[]);
        assert!(map.included().is_empty());
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn args_parse_repeated_exclude() {
        let args = Args::try_parse_from([
            "vcut-streams",
            "movie.mkv",
            "--exclude",
            "1",
            "--exclude",
            "3",
            "--theme",
            "light",
        ])
        .unwrap();
        assert_eq!(args.exclude, vec![1, 3]);
        assert_eq!(args.theme.as_deref(), Some("light"));
        assert_eq!(args.config, PathBuf::from(".config/settings.toml"));
    }

    #[test]
    fn args_parse_log_level() {
        let args =
            Args::try_parse_from(["vcut-streams", "a.mkv", "--log-level", "warning"]).unwrap();
        assert_eq!(args.log_level, Some(LogLevel::Warn));

        let args = Args::try_parse_from(["vcut-streams", "a.mkv"]).unwrap();
        assert_eq!(args.log_level, None);

        assert!(Args::try_parse_from(["vcut-streams", "a.mkv", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn args_reject_unknown_theme() {
        assert!(Args::try_parse_from(["vcut-streams", "a.mkv", "--theme", "blue"]).is_err());
    }
}
