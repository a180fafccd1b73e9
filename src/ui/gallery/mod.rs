// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: one artwork at a time with Previous/Next controls.
//!
//! The component follows the "state down, messages up" pattern: the parent
//! forwards [`Message`]s to [`State::update`], which applies the navigation
//! rules and reports what changed as an [`Event`].
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        artwork frame         │
//! │   ┌──────────────────────┐   │
//! │   │ title                │   │
//! │   │ author (year)        │   │
//! │   └──────────────────────┘   │
//! │            n / N             │
//! │ [Previous]          [Next]   │
//! └──────────────────────────────┘
//! ```

pub mod artwork_frame;
pub mod controls;
pub mod description;
pub mod selection;

pub use selection::{Selection, SelectionChange};

use crate::application::query::navigation::Direction;
use crate::assets::AssetTable;
use crate::catalog::Catalog;
use crate::domain::artwork::ArtworkRecord;
use crate::error::CatalogError;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{self, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, text, Column};
use iced::{alignment, Element, Length, Theme};
use tracing::debug;

/// Environment information required to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub assets: &'a AssetTable,
    pub colors: &'a ColorScheme,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Direction),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SelectionChanged(SelectionChange),
}

/// Gallery component state.
#[derive(Debug, Clone)]
pub struct State {
    selection: Selection,
}

impl State {
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            selection: Selection::new(catalog),
        }
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Navigate(direction) => match self.selection.navigate(direction) {
                Some(change) => Event::SelectionChanged(change),
                None => {
                    debug!(
                        ?direction,
                        current = self.selection.current().value(),
                        "Ignoring navigation past the end of the catalog"
                    );
                    Event::None
                }
            },
        }
    }

    /// Looks up the selected artwork in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the selection is outside the
    /// catalog. Callers show the error; there is no fallback artwork.
    pub fn current_record<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> Result<&'a ArtworkRecord, CatalogError> {
        catalog.lookup(self.selection.current().value())
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let record = match self.current_record(env.catalog) {
            Ok(record) => record,
            Err(err) => {
                let id = self.selection.current().value().to_string();
                return error_display::centered(
                    ErrorDisplay::new(ErrorSeverity::Error)
                        .title(env.i18n.tr(err.i18n_key()))
                        .message(
                            env.i18n
                                .tr_with_args("error-artwork-not-found-details", &[("id", &id)]),
                        ),
                );
            }
        };

        let image = env.assets.resolve(record.image());
        let navigation = self.selection.navigation_info();
        let position = env.i18n.tr_with_args(
            "gallery-position",
            &[
                ("position", &navigation.position.to_string()),
                ("total", &navigation.total.to_string()),
            ],
        );
        let position_color = env.colors.text_secondary;
        let position = text(position)
            .size(typography::CAPTION)
            .style(move |_theme: &Theme| text::Style {
                color: Some(position_color),
            });

        let artwork = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .height(Length::Fill)
            .push(artwork_frame::view(env.i18n, image))
            .push(description::view(env.i18n, record));

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(artwork)
            .push(position)
            .push(controls::view(controls::ViewContext {
                i18n: env.i18n,
                navigation,
            }));

        container(content)
            .padding([spacing::MD, spacing::LG])
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
