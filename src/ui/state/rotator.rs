// SPDX-License-Identifier: MPL-2.0
//! Timer-advanced index over a fixed sequence.
//!
//! A [`Rotator`] owns its items and an auto-advance interval. Two independent
//! triggers write to the same index: the recurring timer calls
//! [`Rotator::advance`], user input calls [`Rotator::select_index`]. Neither
//! trigger affects the other; in particular a manual selection does not
//! restart the timer.
//!
//! The rotator does not own a timer itself. The view that shows it returns a
//! `time::every(rotator.interval())` subscription while mounted, so the timer
//! is cancelled exactly when the subscription stops being returned.
//!
//! # Example
//!
//! ```
//! use podium::ui::state::Rotator;
//! use std::time::Duration;
//!
//! let mut rotator = Rotator::new(vec!['a', 'b', 'c', 'd'], Duration::from_millis(3500))
//!     .expect("non-empty");
//! rotator.select_index(2);
//! rotator.advance();
//! assert_eq!(rotator.current_index(), 3);
//! ```

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Rotator<T> {
    items: Vec<T>,
    index: usize,
    interval: Duration,
}

impl<T> Rotator<T> {
    /// Creates a rotator positioned on the first item.
    ///
    /// Returns `None` for an empty sequence since no index would be valid.
    #[must_use]
    pub fn new(items: Vec<T>, interval: Duration) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            index: 0,
            interval,
        })
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> &T {
        // index < len is upheld by every mutator
        &self.items[self.index]
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; empty rotators cannot be built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Moves to the next item, wrapping after the last one.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    /// Jumps to `index`. Out-of-range values are ignored.
    ///
    /// Returns whether the index was accepted.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Items paired with whether they are the current one.
    pub fn iter_marked(&self) -> impl Iterator<Item = (usize, &T, bool)> {
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| (i, item, i == self.index))
    }
}
