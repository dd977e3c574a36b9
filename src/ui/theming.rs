// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color roles used by the page sections.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_card: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub accent: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: Color::from_rgb(0.95, 0.96, 0.98),
            surface_card: Color::from_rgb(0.91, 0.93, 0.96),

            text_primary: palette::SLATE_950,
            text_secondary: palette::SLATE_800,
            text_muted: palette::GRAY_500,

            brand_primary: palette::BLUE_600,
            brand_secondary: palette::PURPLE_500,
            accent: palette::AMBER_400,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::SLATE_950,
            surface_secondary: palette::SLATE_900,
            surface_card: palette::SLATE_800,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            text_muted: palette::GRAY_400,

            brand_primary: palette::BLUE_400,
            brand_secondary: palette::PURPLE_500,
            accent: palette::AMBER_400,
        }
    }

    /// Scheme matching an already resolved iced theme.
    #[must_use]
    pub fn for_theme(theme: &iced::Theme) -> Self {
        if matches!(theme, iced::Theme::Light) {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Matching built-in iced theme.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn brand_colors_are_blue_in_both_schemes() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.brand_primary.b > light.brand_primary.r);
        assert!(dark.brand_primary.b > dark.brand_primary.r);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_map_to_builtin_themes() {
        assert_eq!(ThemeMode::Dark.iced_theme(), iced::Theme::Dark);
        assert_eq!(ThemeMode::Light.iced_theme(), iced::Theme::Light);
    }
}
