// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick(Instant),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification that expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss(now))
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            if let Some(notification) = self.queue.pop_front() {
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
    }
}
