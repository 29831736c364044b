//! Configuration management for the stream selector.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use vcut_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Theme: {}", config.settings().appearance.theme);
//!
//! // Modify a setting
//! config.settings_mut().appearance.theme = "light".to_string();
//!
//! // Save just the appearance section atomically
//! config.update_section(ConfigSection::Appearance).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    AppearanceSettings, ConfigSection, LoggingSettings, PathSettings, Settings, StreamSettings,
};
