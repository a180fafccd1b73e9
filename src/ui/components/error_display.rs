// SPDX-License-Identifier: MPL-2.0
//! Reusable error display component with consistent styling.
//!
//! Displays a title colored by severity and an optional message inside an
//! outlined panel. Callers pass already-translated strings.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .title(i18n.tr("error-artwork-not-found"))
//!     .message(details)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// Broken invariant - the content cannot be shown (red)
    #[default]
    Error,
    /// Degraded content - the rest of the screen still works (orange)
    Warning,
}

impl ErrorSeverity {
    /// Returns the primary color for this severity level.
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
        }
    }
}

/// Configuration for the ErrorDisplay component.
#[derive(Debug, Clone, Default)]
pub struct ErrorDisplay {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
}

impl ErrorDisplay {
    /// Creates a new error display with the given severity.
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Sets the title (main heading).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (user-friendly explanation).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Renders the error display component.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let accent_color = self.severity.color();

        let mut content = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Shrink);

        if let Some(title_text) = self.title {
            let title = Text::new(title_text)
                .size(typography::TITLE_SM)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                });
            content = content.push(title);
        }

        if let Some(message_text) = self.message {
            content = content.push(Text::new(message_text).size(typography::BODY));
        }

        Container::new(content)
            .padding(spacing::MD)
            .style(move |theme: &Theme| styles::container::error_panel(theme, accent_color))
            .into()
    }
}

/// Centers an error display in the space it is given.
pub fn centered<'a, Message: 'a>(display: ErrorDisplay) -> Element<'a, Message> {
    container(display.view()).center(Length::Fill).into()
}
