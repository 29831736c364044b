//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::selection::{MutePolicy, DEFAULT_SCROLL_THRESHOLD};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Look and feel.
    #[serde(default)]
    pub appearance: AppearanceSettings,

    /// Stream dialog behavior.
    #[serde(default)]
    pub streams: StreamSettings,
}

/// Path configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            logs_folder: default_logs_folder(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Also write logs to a daily file in the logs folder.
    #[serde(default = "default_true")]
    pub file_logging: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            file_logging: true,
        }
    }
}

/// Look and feel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    /// Theme name ("light" or "dark"); selects palette and icon variants.
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

/// Stream dialog behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSettings {
    /// Sections with more streams than this become scrollable.
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: usize,

    /// Initial state of audio/subtitle checkboxes for a freshly probed file.
    #[serde(default = "default_true")]
    pub include_by_default: bool,

    /// ffprobe executable.
    #[serde(default = "default_ffprobe_path")]
    pub ffprobe_path: String,

    /// Warn when a file has no streams of a kind at all.
    #[serde(default)]
    pub warn_on_absent_kind: bool,
}

fn default_scroll_threshold() -> usize {
    DEFAULT_SCROLL_THRESHOLD
}

fn default_ffprobe_path() -> String {
    "ffprobe".to_string()
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
            include_by_default: true,
            ffprobe_path: default_ffprobe_path(),
            warn_on_absent_kind: false,
        }
    }
}

impl StreamSettings {
    /// Close guard policy selected by these settings.
    pub fn mute_policy(&self) -> MutePolicy {
        if self.warn_on_absent_kind {
            MutePolicy::Vacuous
        } else {
            MutePolicy::RequireStreams
        }
    }
}

/// Config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Paths,
    Logging,
    Appearance,
    Streams,
}

impl ConfigSection {
    /// TOML table name of this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
            ConfigSection::Appearance => "appearance",
            ConfigSection::Streams => "streams",
        }
    }

    pub fn all() -> [ConfigSection; 4] {
        [
            ConfigSection::Paths,
            ConfigSection::Logging,
            ConfigSection::Appearance,
            ConfigSection::Streams,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = Settings::default();
        assert_eq!(settings.paths.logs_folder, ".logs");
        assert_eq!(settings.appearance.theme, "dark");
        assert_eq!(settings.streams.scroll_threshold, 2);
        assert!(settings.streams.include_by_default);
        assert_eq!(settings.streams.mute_policy(), MutePolicy::RequireStreams);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("[appearance]\ntheme = \"light\"\n").unwrap();
        assert_eq!(settings.appearance.theme, "light");
        assert_eq!(settings.streams.ffprobe_path, "ffprobe");
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn absent_kind_flag_selects_vacuous_policy() {
        let settings: Settings =
            toml::from_str("[streams]\nwarn_on_absent_kind = true\n").unwrap();
        assert_eq!(settings.streams.mute_policy(), MutePolicy::Vacuous);
    }

    #[test]
    fn section_names_match_fields() {
        let names: Vec<_> = ConfigSection::all().iter().map(|s| s.table_name()).collect();
        assert_eq!(names, vec!["paths", "logging", "appearance", "streams"]);
    }
}
