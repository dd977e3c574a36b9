// SPDX-License-Identifier: MPL-2.0
//! Count-up animation for the statistics row.
//!
//! Every counter runs from zero to its target over the same duration and
//! lands exactly on the target. The animation starts once, when the
//! statistics first scroll into view; after it completes the frame
//! subscription is dropped.

use std::time::{Duration, Instant};

/// Progress curve of the count-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// `1 - (1 - t)^3`: fast start, slow finish.
    EaseOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Value shown for `target` at linear progress `t`.
#[must_use]
pub fn value_at(target: u32, t: f64, easing: Easing) -> u32 {
    if t >= 1.0 {
        return target;
    }
    // floor() keeps the displayed value below target until the last frame
    (easing.apply(t) * f64::from(target)).floor() as u32
}

/// Shared clock of all statistic counters.
#[derive(Debug, Clone)]
pub struct CountUp {
    duration: Duration,
    easing: Easing,
    started_at: Option<Instant>,
    progress: f64,
}

impl CountUp {
    #[must_use]
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            started_at: None,
            progress: 0.0,
        }
    }

    /// Starts the animation at `now`. Later calls are ignored.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
            if self.duration.is_zero() {
                self.progress = 1.0;
            }
        }
    }

    /// Advances the clock to `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(started_at) = self.started_at else {
            return;
        };
        if self.duration.is_zero() {
            self.progress = 1.0;
            return;
        }
        let elapsed = now.saturating_duration_since(started_at);
        self.progress = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// True between `start` and the last frame.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.progress < 1.0
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Displayed value for a counter with the given target.
    #[must_use]
    pub fn value(&self, target: u32) -> u32 {
        value_at(target, self.progress, self.easing)
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn ease_out_runs_ahead_of_linear() {
        assert!(Easing::EaseOutCubic.apply(0.5) > Easing::Linear.apply(0.5));
        assert_eq!(Easing::EaseOutCubic.apply(0.5), 0.875);
    }

    #[test]
    fn value_floors_and_lands_on_target() {
        assert_eq!(value_at(98, 0.5, Easing::Linear), 49);
        assert_eq!(value_at(10, 0.99, Easing::Linear), 9);
        assert_eq!(value_at(5000, 1.0, Easing::Linear), 5000);
        assert_eq!(value_at(5000, 1.0, Easing::EaseOutCubic), 5000);
    }

    #[test]
    fn count_up_does_nothing_before_start() {
        let mut count = CountUp::new(Duration::from_millis(1800), Easing::Linear);
        count.tick(Instant::now());
        assert!(!count.is_started());
        assert!(!count.is_running());
        assert_eq!(count.value(200), 0);
    }

    #[test]
    fn count_up_finishes_after_duration() {
        let start = Instant::now();
        let mut count = CountUp::new(Duration::from_millis(1800), Easing::Linear);
        count.start(start);
        assert!(count.is_running());

        count.tick(start + Duration::from_millis(900));
        assert_eq!(count.value(200), 100);

        count.tick(start + Duration::from_millis(5000));
        assert!(count.is_finished());
        assert!(!count.is_running());
        assert_eq!(count.value(200), 200);
    }

    #[test]
    fn restart_is_ignored() {
        let start = Instant::now();
        let mut count = CountUp::new(Duration::from_millis(2000), Easing::EaseOutCubic);
        count.start(start);
        count.start(start + Duration::from_millis(1000));
        count.tick(start + Duration::from_millis(2000));
        assert!(count.is_finished());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut count = CountUp::new(Duration::ZERO, Easing::Linear);
        count.start(Instant::now());
        assert!(count.is_finished());
        assert_eq!(count.value(98), 98);
    }
}
