// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use iced_gallery::ui::components::error_display::ErrorSeverity;
    use iced_gallery::ui::design_tokens::{palette, radius, sizing, spacing};
    use iced_gallery::ui::styles::{button, container};
    use iced_gallery::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [
                Status::Active,
                Status::Hovered,
                Status::Pressed,
                Status::Disabled,
            ] {
                let _ = button::navigation(&theme, status);
            }
            let _ = container::artwork_frame(&theme);
            let _ = container::description_card(&theme);
            let _ = container::error_panel(&theme, ErrorSeverity::Error.color());
        }
    }

    #[test]
    fn disabled_controls_are_distinguishable_from_enabled() {
        let theme = Theme::Light;
        let active = button::navigation(&theme, Status::Active);
        let disabled = button::navigation(&theme, Status::Disabled);

        assert_ne!(active.background, disabled.background);
        assert_eq!(active.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn cards_share_rounded_corners() {
        let theme = Theme::Light;
        let frame = container::artwork_frame(&theme);
        let card = container::description_card(&theme);

        assert_eq!(frame.border.radius, iced::border::Radius::from(radius::MD));
        assert_eq!(card.border.radius, frame.border.radius);
    }

    #[test]
    fn layout_tokens_fit_minimum_window() {
        let min_width = iced_gallery::config::MIN_WINDOW_WIDTH;
        assert!(2.0 * sizing::CONTROL_MAX_WIDTH + spacing::MD <= min_width);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.colors.surface_primary.r > dark.colors.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
    }
}
