// SPDX-License-Identifier: MPL-2.0
//! State of the mounted page.
//!
//! A `Page` owns the rotators and the statistics counter of one variant.
//! Switching variants drops the page and builds a fresh one, the way
//! navigating between the two routes of a website would. Every page gets a
//! new mount id; the carousel timers are keyed on it, so the old page's
//! timers stop and the new page's start from zero even when the intervals
//! are equal.

use super::config::Config;
use super::variant::Variant;
use crate::content::{Testimonial, PROFILE_PHOTO_FILE};
use crate::ui::gallery::{self, GalleryPhoto};
use crate::ui::state::{CountUp, Rotator};
use crate::ui::testimonials;
use iced::widget::image;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_MOUNT_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug)]
pub struct Page {
    pub variant: Variant,
    /// Distinct for every page built during the process lifetime.
    pub mount_id: u64,
    /// `None` when there is nothing to rotate; the section is then hidden.
    pub gallery: Option<Rotator<GalleryPhoto>>,
    pub testimonials: Option<Rotator<Testimonial>>,
    pub counter: CountUp,
    pub portrait: Option<image::Handle>,
}

impl Page {
    pub fn new(variant: Variant, config: &Config, assets_dir: Option<&Path>) -> Self {
        let gallery = Rotator::new(
            gallery::photos(assets_dir),
            config.carousel.gallery_interval(variant),
        );
        let testimonials = testimonials::rotator(config.carousel.testimonial_interval());
        let portrait = assets_dir
            .map(|dir| dir.join(PROFILE_PHOTO_FILE))
            .filter(|path| path.is_file())
            .map(image::Handle::from_path);

        let mount_id = NEXT_MOUNT_ID.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(
            variant = %variant,
            mount_id,
            photos = gallery.as_ref().map_or(0, Rotator::len),
            portrait = portrait.is_some(),
            "page mounted"
        );

        Self {
            variant,
            mount_id,
            gallery,
            testimonials,
            counter: CountUp::new(variant.counter_duration(), variant.counter_easing()),
            portrait,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::counter::Easing;
    use std::time::Duration;

    #[test]
    fn home_page_uses_home_timings() {
        let page = Page::new(Variant::Home, &Config::default(), None);
        let gallery = page.gallery.expect("gallery");
        assert_eq!(gallery.interval(), Duration::from_millis(3500));
        assert_eq!(gallery.current_index(), 0);
        assert_eq!(page.counter.easing(), Easing::Linear);
        assert!(page.portrait.is_none());
    }

    #[test]
    fn preview_page_uses_preview_timings() {
        let page = Page::new(Variant::Preview, &Config::default(), None);
        assert_eq!(
            page.gallery.expect("gallery").interval(),
            Duration::from_millis(4000)
        );
        assert_eq!(
            page.testimonials.expect("testimonials").interval(),
            Duration::from_millis(6000)
        );
        assert_eq!(page.counter.easing(), Easing::EaseOutCubic);
    }

    #[test]
    fn every_page_gets_a_new_mount_id() {
        let config = Config::default();
        let first = Page::new(Variant::Home, &config, None);
        let second = Page::new(Variant::Home, &config, None);
        assert_ne!(first.mount_id, second.mount_id);
    }

    #[test]
    fn configured_intervals_are_applied() {
        let mut config = Config::default();
        config.carousel.gallery_interval_ms = Some(1000);
        config.carousel.testimonial_interval_ms = Some(2000);
        let page = Page::new(Variant::Home, &config, None);
        assert_eq!(
            page.gallery.expect("gallery").interval(),
            Duration::from_millis(1000)
        );
        assert_eq!(
            page.testimonials.expect("testimonials").interval(),
            Duration::from_millis(2000)
        );
    }
}
