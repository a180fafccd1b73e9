// SPDX-License-Identifier: MPL-2.0
//! Root view composition.

use super::Message;
use crate::assets::AssetTable;
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::AppTheme;
use iced::widget::container;
use iced::{Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub catalog: &'a Catalog,
    pub assets: &'a AssetTable,
    pub gallery: &'a gallery::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = ctx
        .gallery
        .view(gallery::ViewEnv {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
            assets: ctx.assets,
            colors: &ctx.theme.colors,
        })
        .map(Message::Gallery);

    let surface = ctx.theme.colors.surface_primary;
    container(gallery)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(surface.into()),
            ..container::Style::default()
        })
        .into()
}
