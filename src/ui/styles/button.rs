// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled pill used for the main call to action.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    filled(ColorScheme::for_theme(theme).brand_primary, status)
}

/// Green pill of the WhatsApp contact action.
pub fn whatsapp(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::GREEN_600, status)
}

fn filled(base: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_HOVER,
            ..base
        },
        _ => base,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: match status {
            button::Status::Hovered => shadow::SM,
            _ => shadow::NONE,
        },
        snap: true,
    }
}

/// Transparent pill with a thin border, for secondary actions and the
/// language toggle.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let border_alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::OVERLAY_SUBTLE,
    };
    button::Style {
        background: None,
        text_color: scheme.text_primary,
        border: Border {
            color: Color {
                a: border_alpha,
                ..scheme.text_primary
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only button (navbar links, "Download Flyer", modal close).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered => scheme.text_primary,
        _ => scheme.text_secondary,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Carousel position marker. The active dot is stretched horizontally by the
/// caller; this only colors it.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let color = if active {
            scheme.brand_primary
        } else {
            let alpha = match status {
                button::Status::Hovered => opacity::OVERLAY_MEDIUM,
                _ => opacity::OVERLAY_SUBTLE,
            };
            Color {
                a: alpha,
                ..scheme.text_primary
            }
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Clickable card wrapping a gallery thumbnail or a talk. No chrome of its
/// own; the content draws the frame.
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
