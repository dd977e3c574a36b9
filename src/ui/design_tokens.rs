// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the portfolio page.
//!
//! - **Palette**: base colors (slate background, blue/purple brand, amber accent)
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: drop shadows and glows

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Slate surfaces
    pub const SLATE_950: Color = Color::from_rgb(0.008, 0.024, 0.090);
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);
    pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231);

    // Text grays
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.50);

    // Brand colors
    pub const BLUE_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const PURPLE_500: Color = Color::from_rgb(0.576, 0.200, 0.918);
    pub const AMBER_400: Color = Color::from_rgb(0.984, 0.749, 0.141);
    pub const GREEN_600: Color = Color::from_rgb(0.086, 0.639, 0.290);
    pub const RED_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.85;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const SECTION: f32 = 96.0; // Vertical padding between page sections
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Gallery thumbnails
    pub const THUMB_ACTIVE_WIDTH: f32 = 110.0;
    pub const THUMB_ACTIVE_HEIGHT: f32 = 155.0;
    pub const THUMB_WIDTH: f32 = 88.0;
    pub const THUMB_HEIGHT: f32 = 128.0;

    // Carousel dots
    pub const DOT: f32 = 8.0;
    pub const DOT_ACTIVE_WIDTH: f32 = 28.0;

    // Profile portrait
    pub const PORTRAIT: f32 = 240.0;

    // Content widths
    pub const CONTENT_MAX_WIDTH: f32 = 1024.0;
    pub const NARROW_MAX_WIDTH: f32 = 720.0;
    pub const MODAL_WIDTH: f32 = 380.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero name
    pub const DISPLAY: f32 = 56.0;

    /// Section headings
    pub const TITLE_LG: f32 = 34.0;

    /// Card titles, hero tagline
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Nav brand, modal heading
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Quotes
    pub const BODY_LG: f32 = 17.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Caption - Tags, roles, footer
    pub const CAPTION: f32 = 12.0;

    /// Statistic values
    pub const STAT: f32 = 44.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Blue glow around the active gallery photo.
    pub const GLOW: Shadow = Shadow {
        color: Color {
            a: 0.45,
            ..palette::BLUE_400
        },
        offset: Vector::ZERO,
        blur_radius: 18.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);

    assert!(sizing::THUMB_ACTIVE_WIDTH > sizing::THUMB_WIDTH);
    assert!(sizing::DOT_ACTIVE_WIDTH > sizing::DOT);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
