//! Media streams dialog view.
//!
//! One group box per stream kind present in the file, each row showing a
//! checkbox, the kind icon and the stream label, with an OK button below.

use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{
    button, checkbox, column, container, row, scrollable, space, svg, text, tooltip, Column,
    Space,
};
use iced::{Background, Border, Element, Font, Length, Theme};

use vcut_core::labels::{audio_label, subtitle_label, video_label, StreamLabel};
use vcut_core::models::{InclusionMap, StreamKind};
use vcut_core::selection::StreamSelector;

use crate::app::{App, Message};
use crate::icons::icon_handle;
use crate::theme::{font, size, spacing, ThemeKind};

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Build the dialog view.
pub fn view(app: &App) -> Element<'_, Message> {
    // Snapshot so the lock is not held while the tree is built.
    let map = app.inclusion().clone();

    let mut content = column![].spacing(u32::from(spacing::MD)).padding(spacing::LG);

    let sections = app.selector.sections();
    let any_scrollable = sections.iter().any(|kind| app.selector.is_scrollable(*kind));

    for kind in sections {
        content = content.push(section(app, kind, &map));
    }

    // Scrolling sections take up the free space themselves.
    if !any_scrollable {
        content = content.push(Space::new().height(Length::Fill));
    }

    content = content.push(
        row![
            space::horizontal(),
            button(text("OK").size(font::NORMAL))
                .on_press(Message::OkPressed)
                .padding([spacing::SM, spacing::LG]),
        ]
        .align_y(Vertical::Center),
    );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Group box for one stream kind.
fn section<'a>(app: &App, kind: StreamKind, map: &InclusionMap) -> Element<'a, Message> {
    let theme = app.theme;
    let streams = app.selector.streams();

    let labelled: Vec<(usize, StreamLabel)> = match kind {
        StreamKind::Video => streams
            .video
            .iter()
            .map(|video| (video.index, video_label(video)))
            .collect(),
        StreamKind::Audio => streams
            .audio
            .iter()
            .map(|audio| (audio.index, audio_label(audio)))
            .collect(),
        StreamKind::Subtitle => streams
            .subtitle
            .iter()
            .map(|sub| (sub.index, subtitle_label(sub)))
            .collect(),
    };

    let mut rows: Vec<Option<Element<'a, Message>>> = labelled
        .into_iter()
        .map(|(index, label)| {
            let toggle = row_toggle(kind, index, map);
            Some(stream_row(kind, index, toggle, label, theme))
        })
        .collect();

    let mut body = Column::new().spacing(u32::from(spacing::SM));
    for slot in body_slots(rows.len()) {
        match slot {
            BodySlot::Divider => body = body.push(divider(theme)),
            BodySlot::Row(i) => {
                if let Some(entry) = rows.get_mut(i).and_then(Option::take) {
                    body = body.push(entry);
                }
            }
        }
    }

    let body: Element<'a, Message> = if app.selector.is_scrollable(kind) {
        // Grows with the window; the window minimum keeps the scroll minimum.
        scrollable(body.padding([0, spacing::MD]))
            .height(Length::Fill)
            .into()
    } else {
        body.into()
    };

    let border = theme.border();
    container(
        column![text(kind.heading()).size(font::HEADING).font(BOLD), body]
            .spacing(u32::from(spacing::SM)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        border: Border {
            color: border,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    })
    .into()
}

/// Entry in a section body: a stream row, or the divider between two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodySlot {
    Row(usize),
    Divider,
}

/// Rows interleaved with dividers; never a divider before the first row or
/// after the last.
fn body_slots(rows: usize) -> Vec<BodySlot> {
    let mut slots = Vec::with_capacity(rows.saturating_mul(2));
    for i in 0..rows {
        if i > 0 {
            slots.push(BodySlot::Divider);
        }
        slots.push(BodySlot::Row(i));
    }
    slots
}

/// Checkbox state of a stream row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowToggle {
    checked: bool,
    enabled: bool,
}

/// The video stream is always kept: checked and disabled. Other rows follow
/// the map.
fn row_toggle(kind: StreamKind, index: usize, map: &InclusionMap) -> RowToggle {
    match kind {
        StreamKind::Video => RowToggle {
            checked: true,
            enabled: false,
        },
        StreamKind::Audio | StreamKind::Subtitle => RowToggle {
            checked: map.is_included(index),
            enabled: true,
        },
    }
}

/// Minimum height of a scrolling section's list.
fn scroll_min_height(kind: StreamKind) -> f32 {
    match kind {
        StreamKind::Subtitle => size::SUBTITLE_SCROLL_HEIGHT,
        StreamKind::Video | StreamKind::Audio => size::AUDIO_SCROLL_HEIGHT,
    }
}

/// Smallest window height that keeps every scrolling list at its minimum.
pub fn min_content_height(selector: &StreamSelector) -> f32 {
    let sections: f32 = selector
        .sections()
        .into_iter()
        .map(|kind| {
            let body = if selector.is_scrollable(kind) {
                scroll_min_height(kind)
            } else {
                let rows = selector.streams().count(kind) as f32;
                rows * size::ROW_HEIGHT + (rows - 1.0).max(0.0) * size::DIVIDER_GAP
            };
            body + size::SECTION_CHROME + f32::from(spacing::MD)
        })
        .sum();

    sections + size::FOOTER_HEIGHT + 2.0 * f32::from(spacing::LG)
}

/// A single stream row.
fn stream_row<'a>(
    kind: StreamKind,
    index: usize,
    toggle: RowToggle,
    label: StreamLabel,
    theme: ThemeKind,
) -> Element<'a, Message> {
    let toggle: Element<'a, Message> = if toggle.enabled {
        tooltip(
            checkbox(toggle.checked)
                .on_toggle(move |checked| Message::StreamToggled { index, checked }),
            text(format!("Toggle {} stream", kind)).size(font::NORMAL),
            tooltip::Position::Top,
        )
        .style(container::rounded_box)
        .into()
    } else {
        checkbox(toggle.checked).into()
    };

    let icon: Element<'a, Message> = match icon_handle(kind, theme) {
        Some(handle) => svg(handle)
            .width(Length::Fixed(size::ICON))
            .height(Length::Fixed(size::ICON))
            .into(),
        None => Space::new()
            .width(Length::Fixed(size::ICON))
            .height(Length::Fixed(size::ICON))
            .into(),
    };

    row![toggle, icon, label_view(label)]
        .spacing(u32::from(spacing::SM))
        .align_y(Vertical::Center)
        .into()
}

/// Label lines with bold keys.
fn label_view<'a>(label: StreamLabel) -> Element<'a, Message> {
    let mut lines = Column::new().spacing(u32::from(spacing::XS / 2));

    for line in label.lines {
        let mut fields = row![].spacing(u32::from(spacing::MD));
        for field in line {
            fields = fields.push(
                row![
                    text(format!("{}:", field.key)).size(font::NORMAL).font(BOLD),
                    text(field.value).size(font::NORMAL),
                ]
                .spacing(u32::from(spacing::XS)),
            );
        }
        lines = lines.push(fields);
    }

    lines.width(Length::Fill).into()
}

/// Thin separator between rows of one section.
fn divider<'a>(theme: ThemeKind) -> Element<'a, Message> {
    let color = theme.border();
    container(Space::new().width(Length::Fill).height(1))
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        })
        .into()
}
