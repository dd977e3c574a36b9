// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Carousel**: Auto-advance intervals of the gallery and testimonials
//! - **Counters**: Statistic count-up animation
//! - **Layout**: Compact layout breakpoint

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Lecture gallery auto-advance interval on the home page (ms).
pub const DEFAULT_GALLERY_INTERVAL_MS: u64 = 3500;

/// Lecture gallery auto-advance interval on the preview page (ms).
pub const DEFAULT_PREVIEW_GALLERY_INTERVAL_MS: u64 = 4000;

/// Testimonial rotation interval (ms).
pub const DEFAULT_TESTIMONIAL_INTERVAL_MS: u64 = 6000;

/// Shortest accepted auto-advance interval (ms).
pub const MIN_CAROUSEL_INTERVAL_MS: u64 = 500;

/// Longest accepted auto-advance interval (ms).
pub const MAX_CAROUSEL_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Counter Defaults
// ==========================================================================

/// Count-up duration on the home page (ms), linear progress.
pub const HOME_COUNTER_DURATION_MS: u64 = 1800;

/// Count-up duration on the preview page (ms), cubic ease-out.
pub const PREVIEW_COUNTER_DURATION_MS: u64 = 2000;

/// Frame interval used while counters animate (ms).
pub const COUNTER_FRAME_MS: u64 = 16;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width (logical px) below which the compact layout is used.
pub const DEFAULT_COMPACT_WIDTH: f32 = 768.0;

/// Smallest accepted compact breakpoint.
pub const MIN_COMPACT_WIDTH: f32 = 320.0;

/// Largest accepted compact breakpoint.
pub const MAX_COMPACT_WIDTH: f32 = 2000.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_defaults_are_within_bounds() {
        for value in [
            DEFAULT_GALLERY_INTERVAL_MS,
            DEFAULT_PREVIEW_GALLERY_INTERVAL_MS,
            DEFAULT_TESTIMONIAL_INTERVAL_MS,
        ] {
            assert!((MIN_CAROUSEL_INTERVAL_MS..=MAX_CAROUSEL_INTERVAL_MS).contains(&value));
        }
    }

    #[test]
    fn compact_width_default_is_within_bounds() {
        assert!((MIN_COMPACT_WIDTH..=MAX_COMPACT_WIDTH).contains(&DEFAULT_COMPACT_WIDTH));
    }
}
