//! Theme configuration for the stream selector.
//!
//! Maps the configured theme name onto an iced theme, custom colors and
//! the icon variant to load.

use iced::{Color, Theme};

/// Supported theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    Light,
    #[default]
    Dark,
}

impl ThemeKind {
    /// Resolve a theme name; anything other than "dark" is light.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("dark") {
            ThemeKind::Dark
        } else {
            ThemeKind::Light
        }
    }

    /// Name used for icon asset lookup.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }

    pub fn iced_theme(&self) -> Theme {
        match self {
            ThemeKind::Light => Theme::Light,
            ThemeKind::Dark => Theme::Dark,
        }
    }

    /// Header color of the configuration warning.
    pub fn warning_header(&self) -> Color {
        match self {
            ThemeKind::Dark => colors::WARNING_HEADER_DARK,
            ThemeKind::Light => colors::WARNING_HEADER_LIGHT,
        }
    }

    /// Border of section group boxes and row dividers.
    pub fn border(&self) -> Color {
        match self {
            ThemeKind::Dark => colors::BORDER_DARK,
            ThemeKind::Light => colors::BORDER_LIGHT,
        }
    }

    /// Background of the warning card.
    pub fn card(&self) -> Color {
        match self {
            ThemeKind::Dark => colors::CARD_DARK,
            ThemeKind::Light => colors::CARD_LIGHT,
        }
    }
}

/// Application colors.
pub mod colors {
    use super::Color;

    /// Warning header on dark backgrounds (#C681D5)
    pub const WARNING_HEADER_DARK: Color = Color::from_rgb(0.776, 0.506, 0.835);

    /// Warning header on light backgrounds (#642C68)
    pub const WARNING_HEADER_LIGHT: Color = Color::from_rgb(0.392, 0.173, 0.408);

    pub const BORDER_DARK: Color = Color::from_rgb(0.25, 0.25, 0.25);

    pub const BORDER_LIGHT: Color = Color::from_rgb(0.80, 0.80, 0.80);

    /// Card/panel background
    pub const CARD_DARK: Color = Color::from_rgb(0.14, 0.14, 0.14);

    pub const CARD_LIGHT: Color = Color::from_rgb(0.97, 0.97, 0.97);

    /// Backdrop behind the modal warning
    pub const BACKDROP: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.6,
    };
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: u16 = 4;
    /// Small spacing (8px)
    pub const SM: u16 = 8;
    /// Medium spacing (12px)
    pub const MD: u16 = 12;
    /// Large spacing (16px)
    pub const LG: u16 = 16;
}

/// Font sizes.
pub mod font {
    /// Normal font size
    pub const NORMAL: u32 = 13;
    /// Section heading size
    pub const HEADING: u32 = 15;
    /// Warning header size
    pub const HEADER: u32 = 20;
}

/// Layout sizes.
pub mod size {
    /// Stream icon edge
    pub const ICON: f32 = 18.0;
    /// Minimum scroll height of an overflowing audio section
    pub const AUDIO_SCROLL_HEIGHT: f32 = 165.0;
    /// Minimum scroll height of an overflowing subtitle section
    pub const SUBTITLE_SCROLL_HEIGHT: f32 = 150.0;
    /// Width of the warning card
    pub const WARNING_WIDTH: f32 = 350.0;
    /// Approximate height of one stream row (up to three label lines)
    pub const ROW_HEIGHT: f32 = 56.0;
    /// Divider line plus the spacing around it
    pub const DIVIDER_GAP: f32 = 17.0;
    /// Group box heading, padding and border
    pub const SECTION_CHROME: f32 = 56.0;
    /// OK button row
    pub const FOOTER_HEIGHT: f32 = 40.0;
}
