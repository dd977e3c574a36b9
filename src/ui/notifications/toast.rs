// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents and a dismiss button.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::locale::Direction;
use crate::ui::design_tokens::{opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use fluent_bundle::FluentValue;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

const TOAST_WIDTH: f32 = sizing::MODAL_WIDTH;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        direction: Direction,
    ) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let args: Vec<(&str, FluentValue<'_>)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), FluentValue::from(v.as_str())))
            .collect();
        let message_text = i18n.tr_args(notification.message_key(), &args);

        let glyph = Text::new(severity.glyph())
            .size(typography::TITLE_SM)
            .color(accent_color);

        let message_widget = Text::new(message_text)
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(if direction.is_rtl() {
                alignment::Horizontal::Right
            } else {
                alignment::Horizontal::Left
            });

        let dismiss_button = button(text("✕").size(typography::CAPTION))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let mut parts: Vec<Element<'a, Message>> =
            vec![glyph.into(), message_widget.into(), dismiss_button.into()];
        if direction.is_rtl() {
            parts.reverse();
        }

        Container::new(
            Row::with_children(parts)
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center),
        )
        .width(Length::Fixed(TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
    }

    /// Renders the toast overlay with all visible notifications, stacked in
    /// the bottom corner on the reading-end side.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &'a I18n,
        direction: Direction,
    ) -> Option<Element<'a, Message>> {
        if !manager.has_notifications() {
            return None;
        }

        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n, direction))
            .collect();

        let side = if direction.is_rtl() {
            alignment::Horizontal::Left
        } else {
            alignment::Horizontal::Right
        };

        Some(
            Container::new(Column::with_children(toasts).spacing(spacing::XS).align_x(side))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(side)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into(),
        )
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(iced::Background::Color(scheme.surface_card)),
        border: iced::Border {
            color: accent_color,
            width: 1.5,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..scheme.text_muted
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..scheme.text_muted
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: scheme.text_secondary,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
