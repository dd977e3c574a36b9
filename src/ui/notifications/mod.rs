// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to confirm actions (link copied, flyer
//! saved) or report problems without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Design Considerations
//!
//! - Toast duration: 4s for success/info, 6s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom corner on the reading-end side (left in RTL)

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
