// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 4s duration).
    #[default]
    Success,
    /// Informational message (blue, 4s duration).
    Info,
    /// Warning that doesn't block operation (amber, 6s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::GREEN_600,
            Severity::Info => palette::BLUE_400,
            Severity::Warning => palette::AMBER_400,
            Severity::Error => palette::RED_600,
        }
    }

    /// Leading glyph of the toast.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(4)),
            Severity::Warning => Some(Duration::from_secs(6)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Arguments for message interpolation.
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` is resolved at render time so the text follows
    /// language switches.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns whether this notification has outlived its display time at `now`.
    #[must_use]
    pub fn should_auto_dismiss(&self, now: Instant) -> bool {
        match self.severity.auto_dismiss_duration() {
            Some(duration) => now.saturating_duration_since(self.created_at) >= duration,
            None => false,
        }
    }
}
