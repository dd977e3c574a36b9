// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::variant::Variant;
use crate::content::Flyer;
use crate::ui::carousel;
use crate::ui::flyer_modal;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(carousel::Message),
    Testimonials(carousel::Message),
    Section(sections::Message),
    FlyerModal(flyer_modal::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved or was resized.
    PageScrolled {
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
    },
    /// Animation frame of the statistics count-up.
    CounterFrame(Instant),
    Tick(Instant), // Periodic tick for notification auto-dismiss
    WindowResized(Size),
    /// Result from the flyer save dialog.
    FlyerSaveDialogResult {
        flyer: Flyer,
        path: Option<PathBuf>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional language override (`he` or `en`), applied and persisted like
    /// a toggle.
    pub lang: Option<String>,
    /// Page variant to open; falls back to the config file, then `Home`.
    pub variant: Option<Variant>,
}
