// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-bounded interpolation for the release return animation.
//!
//! A [`Tween`] maps host time onto a straight-line path between two offsets
//! through an easing curve. It is sampled once per frame tick with the
//! tick's timestamp; there is no internal clock and no per-frame increment,
//! so a stalled frame loop stalls the animation with it.

use kurbo::Vec2;

use crate::time::{Duration, HostTime};

/// Overshoot amount for [`Easing::BackOut`].
const BACK_OVERSHOOT: f64 = 1.70158;

/// Easing curve applied to normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant-velocity interpolation.
    Linear,
    /// Decelerates past the target, then settles back onto it.
    ///
    /// This is the springy curve the release animation uses: the artwork
    /// visibly overshoots center before coming to rest.
    #[default]
    BackOut,
}

impl Easing {
    /// Maps progress `t` in `[0, 1]` onto the eased value.
    ///
    /// Inputs outside the unit interval are clamped. The output starts at 0
    /// and ends at exactly 1 but may leave `[0, 1]` in between (that is the
    /// overshoot).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::BackOut => {
                let u = t - 1.0;
                u * u * ((BACK_OVERSHOOT + 1.0) * u + BACK_OVERSHOOT) + 1.0
            }
        }
    }
}

/// An in-flight interpolation between two offsets.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: Vec2,
    to: Vec2,
    start: HostTime,
    duration: Duration,
    easing: Easing,
    finished: bool,
}

impl Tween {
    /// Creates a tween running from `start` for `duration`.
    ///
    /// A zero duration completes on the first sample.
    #[must_use]
    pub fn new(from: Vec2, to: Vec2, start: HostTime, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
            finished: false,
        }
    }

    /// Samples the tween at the given time, advancing it.
    ///
    /// Once `now` reaches the end of the duration the tween reports exactly
    /// `to` (no floating-point residue) and stays finished; the caller can
    /// rely on the final value being the target, not merely close to it.
    /// Timestamps before `start` sample as `from`.
    pub fn sample(&mut self, now: HostTime) -> Vec2 {
        if self.finished {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= self.duration {
            self.finished = true;
            return self.to;
        }
        let t = elapsed.ticks() as f64 / self.duration.ticks() as f64;
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Whether the tween has reached its target.
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The value the tween settles on.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Vec2 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::BackOut] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn back_out_overshoots_mid_curve() {
        let peak = Easing::BackOut.apply(0.6);
        assert!(peak > 1.0, "expected overshoot, got {peak}");
        // Clamping keeps out-of-range inputs at the endpoints.
        assert_eq!(Easing::BackOut.apply(-2.0), 0.0);
        assert_eq!(Easing::BackOut.apply(3.0), 1.0);
    }

    #[test]
    fn linear_tween_interpolates_by_time() {
        let mut tween = Tween::new(
            Vec2::new(10.0, -20.0),
            Vec2::ZERO,
            HostTime(1000),
            Duration(100),
            Easing::Linear,
        );
        assert_eq!(tween.sample(HostTime(1000)), Vec2::new(10.0, -20.0));
        assert_eq!(tween.sample(HostTime(1050)), Vec2::new(5.0, -10.0));
        assert!(!tween.is_finished());
    }

    #[test]
    fn completion_snaps_exactly_to_target() {
        let mut tween = Tween::new(
            Vec2::new(3.3, 7.7),
            Vec2::ZERO,
            HostTime(0),
            Duration(300),
            Easing::BackOut,
        );
        let _ = tween.sample(HostTime(250));
        let settled = tween.sample(HostTime(300));
        assert_eq!(settled, Vec2::ZERO, "no residue allowed at completion");
        assert!(tween.is_finished());
        assert_eq!(tween.sample(HostTime(10_000)), Vec2::ZERO);
    }

    #[test]
    fn back_out_crosses_past_the_target() {
        let mut tween = Tween::new(
            Vec2::new(10.0, 0.0),
            Vec2::ZERO,
            HostTime(0),
            Duration(100),
            Easing::BackOut,
        );
        let mid = tween.sample(HostTime(60));
        assert!(mid.x < 0.0, "expected overshoot past zero, got {}", mid.x);
    }

    #[test]
    fn samples_before_start_hold_the_initial_value() {
        let mut tween = Tween::new(
            Vec2::new(1.0, 1.0),
            Vec2::ZERO,
            HostTime(500),
            Duration(100),
            Easing::Linear,
        );
        assert_eq!(tween.sample(HostTime(100)), Vec2::new(1.0, 1.0));
        assert!(!tween.is_finished());
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut tween = Tween::new(
            Vec2::new(5.0, 5.0),
            Vec2::ZERO,
            HostTime(0),
            Duration::ZERO,
            Easing::BackOut,
        );
        assert_eq!(tween.sample(HostTime(0)), Vec2::ZERO);
        assert!(tween.is_finished());
    }
}
