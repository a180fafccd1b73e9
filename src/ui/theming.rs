// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theming.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Theme resolved once at startup.
///
/// System detection happens in [`AppTheme::new`] so rendering never queries the OS.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// The built-in Iced theme matching the resolved mode.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9); // Close to white
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2); // Close to black
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn app_theme_maps_to_iced_theme() {
        assert_eq!(AppTheme::new(ThemeMode::Light).iced_theme(), Theme::Light);
        assert_eq!(AppTheme::new(ThemeMode::Dark).iced_theme(), Theme::Dark);
        assert!(AppTheme::new(ThemeMode::Dark).is_dark());
    }
}
