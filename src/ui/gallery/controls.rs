// SPDX-License-Identifier: MPL-2.0
//! Previous/Next controls.

use super::Message;
use crate::application::query::navigation::{Direction, NavigationInfo};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row, Space};
use iced::{alignment, Element, Length};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigation: NavigationInfo,
}

/// Message a control emits when pressed, or `None` while it is disabled.
#[must_use]
pub fn control_message(direction: Direction, navigation: NavigationInfo) -> Option<Message> {
    navigation
        .is_enabled(direction)
        .then_some(Message::Navigate(direction))
}

fn label_key(direction: Direction) -> &'static str {
    match direction {
        Direction::Previous => "gallery-previous",
        Direction::Next => "gallery-next",
    }
}

fn control<'a>(ctx: &ViewContext<'_>, direction: Direction) -> Element<'a, Message> {
    let label = text(ctx.i18n.tr(label_key(direction)))
        .size(typography::BODY)
        .align_x(alignment::Horizontal::Center);

    let button = button(container(label).center(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::navigation)
        .on_press_maybe(control_message(direction, ctx.navigation));

    container(button)
        .width(Length::Fill)
        .max_width(sizing::CONTROL_MAX_WIDTH)
        .into()
}

pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .push(control(&ctx, Direction::Previous))
        .push(Space::new().width(Length::Fill))
        .push(control(&ctx, Direction::Next))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artwork::ArtworkId;

    fn navigation(position: u32, total: usize) -> NavigationInfo {
        NavigationInfo::new(ArtworkId::new(position).unwrap(), total)
    }

    #[test]
    fn previous_is_disabled_on_first_artwork() {
        let info = navigation(1, 3);
        assert!(control_message(Direction::Previous, info).is_none());
        assert!(matches!(
            control_message(Direction::Next, info),
            Some(Message::Navigate(Direction::Next))
        ));
    }

    #[test]
    fn next_is_disabled_on_last_artwork() {
        let info = navigation(3, 3);
        assert!(control_message(Direction::Next, info).is_none());
        assert!(control_message(Direction::Previous, info).is_some());
    }

    #[test]
    fn single_artwork_disables_both_controls() {
        let info = navigation(1, 1);
        assert!(control_message(Direction::Previous, info).is_none());
        assert!(control_message(Direction::Next, info).is_none());
    }

    #[test]
    fn controls_use_their_own_labels() {
        let i18n = I18n::new(Some("en-US"));
        assert_eq!(i18n.tr(label_key(Direction::Previous)), "Previous");
        assert_eq!(i18n.tr(label_key(Direction::Next)), "Next");
    }
}
