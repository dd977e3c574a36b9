// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Alternate band behind every other section.
pub fn band(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        ..Default::default()
    }
}

/// Rounded bar holding the navigation.
pub fn navbar(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..scheme.text_muted
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Service, testimonial and talk cards.
pub fn card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_card)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..scheme.text_muted
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Small rounded label (service tags, hero badge).
pub fn tag(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..scheme.brand_primary
        })),
        text_color: Some(scheme.brand_primary),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Gallery photo frame; the active photo gets a glow.
pub fn photo(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(scheme.surface_card)),
            text_color: Some(scheme.text_muted),
            border: Border {
                color: if active {
                    scheme.brand_primary
                } else {
                    Color::TRANSPARENT
                },
                width: if active { 2.0 } else { 0.0 },
                radius: radius::MD.into(),
            },
            shadow: if active { shadow::GLOW } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Amber strip above the navbar on the preview page.
pub fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::AMBER_400)),
        text_color: Some(palette::SLATE_950),
        ..Default::default()
    }
}

/// Dimmed layer behind the flyer dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Flyer dialog surface.
pub fn modal(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        text_color: Some(scheme.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}
