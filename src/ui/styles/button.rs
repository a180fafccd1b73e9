// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(
    background: Color,
    text_color: Color,
    border_color: Color,
    shadow: Shadow,
) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow,
        snap: true,
    }
}

/// Style for the Previous/Next controls.
///
/// Uses the brand colors while enabled and a theme-aware gray when the
/// control is disabled at either end of the catalog.
pub fn navigation(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active => filled(
            palette::PRIMARY_500,
            WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            WHITE,
            palette::PRIMARY_500,
            shadow::SM,
        ),
        button::Status::Pressed => filled(
            palette::PRIMARY_700,
            WHITE,
            palette::PRIMARY_700,
            shadow::NONE,
        ),
        button::Status::Disabled => {
            let background = if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            };
            filled(background, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
        }
    }
}
