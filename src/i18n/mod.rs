// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Page text for both supported locales is embedded in the binary and looked
//! up by key.
//!
//! # Features
//!
//! - Embedded `.ftl` translation files (one per [`crate::locale::Locale`])
//! - Runtime language switching driven by the locale store
//! - Placeable formatting (e.g. the copyright year)

pub mod fluent;

pub use fluent::I18n;
