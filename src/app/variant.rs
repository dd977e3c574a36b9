// SPDX-License-Identifier: MPL-2.0
//! Page variants.
//!
//! The portfolio ships two renditions of the same page. `Home` is the
//! production page; `Preview` is the redesign with a morphing gallery and a
//! notice banner. They share all sections and differ only in a few timings
//! and labels, captured by the methods below.

use crate::app::config::{HOME_COUNTER_DURATION_MS, PREVIEW_COUNTER_DURATION_MS};
use crate::ui::state::counter::Easing;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Home,
    Preview,
}

impl Variant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Home => "home",
            Variant::Preview => "preview",
        }
    }

    /// Translation key of the window title.
    pub const fn title_key(self) -> &'static str {
        match self {
            Variant::Home => "window-title-home",
            Variant::Preview => "window-title-preview",
        }
    }

    /// Translation key of the banner shown above the navbar, if any.
    pub const fn banner_key(self) -> Option<&'static str> {
        match self {
            Variant::Home => None,
            Variant::Preview => Some("preview-banner"),
        }
    }

    /// Duration of the statistics count-up.
    pub const fn counter_duration(self) -> Duration {
        match self {
            Variant::Home => Duration::from_millis(HOME_COUNTER_DURATION_MS),
            Variant::Preview => Duration::from_millis(PREVIEW_COUNTER_DURATION_MS),
        }
    }

    pub const fn counter_easing(self) -> Easing {
        match self {
            Variant::Home => Easing::Linear,
            Variant::Preview => Easing::EaseOutCubic,
        }
    }

    /// Suggested file names for the two lecture flyers, in
    /// (body language, public speaking) order.
    pub const fn flyer_file_names(self) -> [&'static str; 2] {
        match self {
            Variant::Home => ["gabi-body-language.jpg", "gabi-public-speaking.jpg"],
            Variant::Preview => [
                "gabi-aharon-body-language.jpg",
                "gabi-aharon-public-speaking.jpg",
            ],
        }
    }

    /// The gallery on the preview page shows the active photo large with
    /// the remaining ones as a thumbnail strip.
    pub const fn shows_thumbnail_strip(self) -> bool {
        matches!(self, Variant::Preview)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized variant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown page variant '{}' (expected home or preview)", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Variant::Home),
            "preview" => Ok(Variant::Preview),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Preview".parse::<Variant>(), Ok(Variant::Preview));
        assert_eq!(" home ".parse::<Variant>(), Ok(Variant::Home));
        assert!("landing".parse::<Variant>().is_err());
    }

    #[test]
    fn only_preview_has_banner() {
        assert_eq!(Variant::Home.banner_key(), None);
        assert_eq!(Variant::Preview.banner_key(), Some("preview-banner"));
    }

    #[test]
    fn counter_profiles_differ() {
        assert_eq!(Variant::Home.counter_duration(), Duration::from_millis(1800));
        assert_eq!(Variant::Home.counter_easing(), Easing::Linear);
        assert_eq!(
            Variant::Preview.counter_duration(),
            Duration::from_millis(2000)
        );
        assert_eq!(Variant::Preview.counter_easing(), Easing::EaseOutCubic);
    }

    #[test]
    fn flyer_names_are_prefixed_on_preview() {
        for name in Variant::Preview.flyer_file_names() {
            assert!(name.starts_with("gabi-aharon-"));
        }
        assert_eq!(
            Variant::Home.flyer_file_names()[0],
            "gabi-body-language.jpg"
        );
    }
}
