// SPDX-License-Identifier: MPL-2.0
//! `podium` is a bilingual (Hebrew/English) speaker portfolio built with the
//! Iced GUI framework.
//!
//! It shows a single scrolling page with a lecture gallery, animated
//! statistics, services, testimonials and contact links. The display language
//! is held by a persisted [`locale::LocaleStore`]; the gallery and the
//! testimonials rotate through a generic [`ui::state::Rotator`].

pub mod app;
pub mod content;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod logging;
pub mod ui;
