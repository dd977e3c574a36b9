// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode and default page variant
//! - `[carousel]` - Auto-advance intervals for the gallery and testimonials
//! - `[layout]` - Compact layout breakpoint
//!
//! The display language is *not* part of this file. It is a single
//! key-value preference owned by [`crate::locale::LocaleStore`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `PODIUM_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use podium::app::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("testimonials every {:?}", config.carousel.testimonial_interval());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::app::variant::Variant;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,

    /// Page variant shown when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
}

/// Carousel timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Lecture gallery interval on the home page (ms).
    #[serde(
        default = "default_gallery_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub gallery_interval_ms: Option<u64>,

    /// Lecture gallery interval on the preview page (ms).
    #[serde(
        default = "default_preview_gallery_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_gallery_interval_ms: Option<u64>,

    /// Testimonial rotation interval (ms).
    #[serde(
        default = "default_testimonial_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub testimonial_interval_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gallery_interval_ms: default_gallery_interval_ms(),
            preview_gallery_interval_ms: default_preview_gallery_interval_ms(),
            testimonial_interval_ms: default_testimonial_interval_ms(),
        }
    }
}

impl CarouselConfig {
    /// Gallery interval for `variant`, clamped to the accepted range.
    #[must_use]
    pub fn gallery_interval(&self, variant: Variant) -> Duration {
        let ms = match variant {
            Variant::Home => self
                .gallery_interval_ms
                .unwrap_or(DEFAULT_GALLERY_INTERVAL_MS),
            Variant::Preview => self
                .preview_gallery_interval_ms
                .unwrap_or(DEFAULT_PREVIEW_GALLERY_INTERVAL_MS),
        };
        clamp_interval(ms)
    }

    /// Testimonial interval, clamped to the accepted range.
    #[must_use]
    pub fn testimonial_interval(&self) -> Duration {
        clamp_interval(
            self.testimonial_interval_ms
                .unwrap_or(DEFAULT_TESTIMONIAL_INTERVAL_MS),
        )
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Window width (logical px) below which sections stack vertically.
    #[serde(
        default = "default_compact_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub compact_width: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            compact_width: default_compact_width(),
        }
    }
}

impl LayoutConfig {
    /// Compact breakpoint, clamped to the accepted range.
    #[must_use]
    pub fn compact_width(&self) -> f32 {
        self.compact_width
            .unwrap_or(DEFAULT_COMPACT_WIDTH)
            .clamp(MIN_COMPACT_WIDTH, MAX_COMPACT_WIDTH)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_gallery_interval_ms() -> Option<u64> {
    Some(DEFAULT_GALLERY_INTERVAL_MS)
}

fn default_preview_gallery_interval_ms() -> Option<u64> {
    Some(DEFAULT_PREVIEW_GALLERY_INTERVAL_MS)
}

fn default_testimonial_interval_ms() -> Option<u64> {
    Some(DEFAULT_TESTIMONIAL_INTERVAL_MS)
}

fn default_compact_width() -> Option<f32> {
    Some(DEFAULT_COMPACT_WIDTH)
}

fn clamp_interval(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_CAROUSEL_INTERVAL_MS, MAX_CAROUSEL_INTERVAL_MS))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
