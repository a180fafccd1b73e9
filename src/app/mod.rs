// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the catalog, localization, theme and the
//! gallery component, and routes keyboard input to the gallery.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::assets::AssetTable;
use crate::catalog::Catalog;
use crate::config::WindowConfig;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use tracing::{debug, error, info};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    catalog: Catalog,
    assets: AssetTable,
    gallery: gallery::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("catalog_size", &self.catalog.size())
            .field("selection", self.gallery.selection())
            .finish()
    }
}

/// Builds the window settings from the settings profile.
pub fn window_settings(window: &WindowConfig) -> window::Settings {
    let icon = crate::icon::load_window_icon();
    let (width, height) = window.size();
    let (min_width, min_height) = window.min_size();

    window::Settings {
        size: iced::Size::new(width, height),
        min_size: Some(iced::Size::new(min_width, min_height)),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let settings = window_settings(&flags.config.window);
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the initial state. Every session starts on the first artwork.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            config,
            catalog,
            assets,
        } = flags;

        let app = App {
            i18n: I18n::new(config.general.language.as_deref()),
            theme: AppTheme::new(config.general.theme_mode),
            gallery: gallery::State::new(&catalog),
            catalog,
            assets,
        };
        info!(locale = %app.i18n.current_locale(), "Gallery session started");
        app.report_unresolved_selection();

        (app, Task::none())
    }

    /// Window title: the current artwork's title followed by the app name.
    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.gallery.current_record(&self.catalog) {
            Ok(record) => format!("{} - {app_name}", self.i18n.tr(record.title().key())),
            Err(_) => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => match self.gallery.update(message) {
                gallery::Event::SelectionChanged(change) => {
                    debug!(
                        from = change.previous.value(),
                        to = change.current.value(),
                        direction = ?change.direction,
                        "Selection changed"
                    );
                    self.report_unresolved_selection();
                }
                gallery::Event::None => {}
            },
        }

        Task::none()
    }

    /// Logs once per selection change when the gallery will show the
    /// not-found panel instead of an artwork.
    fn report_unresolved_selection(&self) {
        if let Err(err) = self.gallery.current_record(&self.catalog) {
            error!(
                id = self.gallery.selection().current().value(),
                %err,
                "Selected artwork is not in the catalog"
            );
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            catalog: &self.catalog,
            assets: &self.assets,
            gallery: &self.gallery,
        })
    }
}
