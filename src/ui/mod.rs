// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page Components
//!
//! - [`navbar`] - Speaker name, section links and the language toggle
//! - [`sections`] - Banner, hero, statistics, services, about, talks, contact, footer
//! - [`gallery`] - Rotating lecture photos
//! - [`testimonials`] - Rotating testimonial card
//! - [`flyer_modal`] - Flyer download dialog
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state (rotator, count-up)
//! - [`carousel`] - Timer, messages and dots shared by rotating sections
//! - [`layout`] - Direction- and width-aware row helpers
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel;
pub mod design_tokens;
pub mod flyer_modal;
pub mod gallery;
pub mod layout;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod state;
pub mod styles;
pub mod testimonials;
pub mod theming;
