//! Embedded stream-kind icons.
//!
//! One SVG per stream kind and theme variant under `assets/icons/<theme>/`.

use std::borrow::Cow;

use iced::widget::svg;
use rust_embed::RustEmbed;

use vcut_core::models::StreamKind;

use crate::theme::ThemeKind;

#[derive(RustEmbed)]
#[folder = "assets/icons/"]
struct IconAssets;

/// Icon name for a stream kind.
pub fn icon_name(kind: StreamKind) -> &'static str {
    match kind {
        StreamKind::Video => "streams-video",
        StreamKind::Audio => "streams-audio",
        StreamKind::Subtitle => "streams-subtitle",
    }
}

/// Raw SVG bytes for a stream kind in the given theme.
pub fn icon_bytes(kind: StreamKind, theme: ThemeKind) -> Option<Cow<'static, [u8]>> {
    let path = format!("{}/{}.svg", theme.name(), icon_name(kind));
    let file = IconAssets::get(&path);
    if file.is_none() {
        tracing::warn!("Missing icon asset {}", path);
    }
    file.map(|f| f.data)
}

pub fn icon_handle(kind: StreamKind, theme: ThemeKind) -> Option<svg::Handle> {
    icon_bytes(kind, theme).map(svg::Handle::from_memory)
}
