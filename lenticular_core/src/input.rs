// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-drag and device-tilt input tracking.
//!
//! [`InputTracker`] folds raw input events into two persistent offsets:
//!
//! - the *pointer offset*, the displacement of the pointer from where the
//!   current drag began, and
//! - the *motion offset*, the device tilt relative to a baseline captured
//!   from the first orientation reading.
//!
//! Both offsets survive their input source going quiet; a layer keeps its
//! displacement until some event moves it again. The two contributions stay
//! independent here and are only combined per-layer by the offset
//! calculation in [`crate::offset`].

use kurbo::{Point, Vec2};

/// Which way the device is physically rotated, as reported by the host.
///
/// The tilt axes of a device-orientation reading are fixed to the device,
/// not the screen; the tracker uses this class to remap raw beta/gamma
/// deltas into screen axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Natural portrait (screen angle 0°).
    #[default]
    Portrait,
    /// Rotated to landscape, 90°.
    LandscapeLeft,
    /// Rotated to landscape the other way, −90°.
    LandscapeRight,
    /// Upside-down portrait, or any orientation the host cannot classify.
    Flipped,
}

/// Accumulates pointer and tilt input into the two scene-wide offsets.
#[derive(Clone, Debug)]
pub struct InputTracker {
    gesture_active: bool,
    origin: Point,
    pointer: Vec2,
    motion: Vec2,
    /// Raw angles at the start of the current tilt epoch: `x` holds beta,
    /// `y` holds gamma. `None` until the first reading after a reset.
    baseline: Option<Vec2>,
    max_motion_offset: f64,
}

impl InputTracker {
    /// Creates a tracker with both offsets at zero and no motion baseline.
    ///
    /// `max_motion_offset` bounds each component of the motion offset.
    ///
    /// # Panics
    ///
    /// Panics if `max_motion_offset` is negative or not finite.
    #[must_use]
    pub fn new(max_motion_offset: f64) -> Self {
        assert!(
            max_motion_offset.is_finite() && max_motion_offset >= 0.0,
            "max motion offset must be finite and non-negative"
        );
        Self {
            gesture_active: false,
            origin: Point::ORIGIN,
            pointer: Vec2::ZERO,
            motion: Vec2::ZERO,
            baseline: None,
            max_motion_offset,
        }
    }

    /// Starts a drag session anchored at the given position.
    ///
    /// Valid in any state; a new call overwrites a stale session. The
    /// pointer offset is left untouched until the first move arrives.
    pub fn begin_gesture(&mut self, x: f64, y: f64) {
        self.origin = Point::new(x, y);
        self.gesture_active = true;
    }

    /// Updates the pointer offset from a move to the given position.
    ///
    /// Returns `true` if a session is active and the offset was updated;
    /// moves outside a session are ignored.
    pub fn update_pointer(&mut self, x: f64, y: f64) -> bool {
        if !self.gesture_active {
            return false;
        }
        self.pointer = Point::new(x, y) - self.origin;
        true
    }

    /// Ends the drag session.
    ///
    /// The pointer offset keeps its last value; animating it back to zero is
    /// the gesture machine's job.
    pub fn end_gesture(&mut self) {
        self.gesture_active = false;
    }

    /// Folds one device-orientation reading into the motion offset.
    ///
    /// The first reading after construction or [`reset_motion_baseline`]
    /// captures the baseline; every reading (including that one) then maps
    /// the beta/gamma deltas into screen axes according to `orientation` and
    /// clamps both components to the configured maximum.
    ///
    /// Returns `true` if this call captured the baseline.
    ///
    /// [`reset_motion_baseline`]: Self::reset_motion_baseline
    pub fn update_motion(&mut self, beta: f64, gamma: f64, orientation: Orientation) -> bool {
        let captured = self.baseline.is_none();
        let baseline = *self.baseline.get_or_insert(Vec2::new(beta, gamma));
        let db = beta - baseline.x;
        let dg = gamma - baseline.y;
        let raw = match orientation {
            Orientation::Portrait => Vec2::new(dg, db),
            Orientation::LandscapeLeft => Vec2::new(db, -dg),
            Orientation::LandscapeRight => Vec2::new(-db, dg),
            Orientation::Flipped => Vec2::new(-dg, -db),
        };
        let max = self.max_motion_offset;
        self.motion = Vec2::new(raw.x.clamp(-max, max), raw.y.clamp(-max, max));
        captured
    }

    /// Discards the motion baseline; the next reading captures a fresh one.
    ///
    /// Called when the device orientation changes, so that tilt is measured
    /// relative to how the user is newly holding the device.
    pub fn reset_motion_baseline(&mut self) {
        self.baseline = None;
    }

    /// Overwrites the pointer offset directly.
    ///
    /// This is the write path for the return animation, which steers the
    /// offset back to zero after a release.
    pub fn set_pointer_offset(&mut self, offset: Vec2) {
        self.pointer = offset;
    }

    /// Current pointer offset.
    #[inline]
    #[must_use]
    pub fn pointer_offset(&self) -> Vec2 {
        self.pointer
    }

    /// Current motion offset. Each component is within the configured bound.
    #[inline]
    #[must_use]
    pub fn motion_offset(&self) -> Vec2 {
        self.motion
    }

    /// Whether a drag session is active.
    #[inline]
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// Whether a motion baseline has been captured this epoch.
    #[inline]
    #[must_use]
    pub fn has_motion_baseline(&self) -> bool {
        self.baseline.is_some()
    }
}
