// SPDX-License-Identifier: MPL-2.0
//! Framed artwork image, scaled to fit the space left by the description.

use super::Message;
use crate::error::AssetError;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{container, svg, Svg};
use iced::{ContentFit, Element, Length};

/// Renders `image` inside the elevated frame.
///
/// A missing image keeps the frame and shows a warning in place of the
/// artwork so the rest of the screen stays usable.
pub fn view<'a>(i18n: &I18n, image: Result<&svg::Handle, AssetError>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match image {
        Ok(handle) => Svg::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Err(err) => ErrorDisplay::new(ErrorSeverity::Warning)
            .title(i18n.tr(err.i18n_key()))
            .message(err.to_string())
            .view(),
    };

    let frame = container(content)
        .padding(spacing::LG)
        .center(Length::Fill)
        .style(styles::container::artwork_frame);

    container(frame)
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
