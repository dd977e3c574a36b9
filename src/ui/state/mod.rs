// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Time-driven state kept apart from the widgets that display it.

pub mod counter;
pub mod rotator;

pub use counter::{CountUp, Easing};
pub use rotator::Rotator;
