// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card framing the artwork: white backing, rounded corners, and elevation.
///
/// The backing stays white in dark mode so transparent areas of an artwork
/// read the same in both themes.
pub fn artwork_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::ELEVATION,
        ..Default::default()
    }
}

/// Shaded card holding the title, author, and year.
pub fn description_card(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::GRAY_900),
        background: Some(Background::Color(palette::GRAY_200)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Panel shown in place of content that failed to resolve.
///
/// The accent color outlines the panel and tints its background.
pub fn error_panel(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        text_color: Some(theme.extended_palette().background.base.text),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
