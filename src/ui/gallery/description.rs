// SPDX-License-Identifier: MPL-2.0
//! Description card: translated title, bold author and release year.

use super::Message;
use crate::domain::artwork::ArtworkRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column, Row, Text};
use iced::{alignment, font, Element, Font, Length};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Formats the year shown next to the author, e.g. `(1967)`.
pub fn year_label(record: &ArtworkRecord) -> String {
    format!("({})", record.release_year())
}

pub fn view<'a>(i18n: &I18n, record: &ArtworkRecord) -> Element<'a, Message> {
    let title = Text::new(i18n.tr(record.title().key())).size(typography::TITLE_MD);

    let byline = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(
            text(record.author().to_string())
                .size(typography::BODY)
                .font(BOLD),
        )
        .push(text(year_label(record)).size(typography::BODY));

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(byline);

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .max_width(sizing::DESCRIPTION_MAX_WIDTH)
        .center_x(Length::Fill)
        .style(styles::container::description_card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn year_label_wraps_release_year() {
        let catalog = Catalog::bundled().unwrap();
        let record = catalog.lookup(2).unwrap();
        assert_eq!(year_label(record), "(1430)");
    }
}
