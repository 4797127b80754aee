// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag lifecycle and the animated return to center.
//!
//! [`GestureMachine`] owns the phase of the current drag interaction and
//! the return tween that runs after a release. Every event is total: any
//! event in any phase has a defined outcome, so out-of-order input from the
//! host (a release with no press, a press landing mid-return) never wedges
//! the machine.
//!
//! ```text
//!              press                release
//!   Idle ──────────────► Active ──────────────► Returning
//!    ▲                     ▲                     │     │
//!    │                     │       press         │     │ tween completes
//!    │                     └─────────────────────┘     │ (offset exactly zero)
//!    └─────────────────────────────────────────────────┘
//! ```
//!
//! A press during `Returning` cancels the tween outright and the new drag
//! takes over; a release during `Returning` restarts the return from the
//! current offset. Cancellation is always replace-or-drop, never blend, so
//! at most one return animation exists at a time.

use kurbo::Vec2;

use crate::input::InputTracker;
use crate::time::{Duration, HostTime};
use crate::tween::{Easing, Tween};

/// Phase of the drag interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// No drag in progress and no return animation running.
    #[default]
    Idle,
    /// A press has been received and moves are being tracked.
    Active,
    /// The pointer offset is animating back to zero after a release.
    Returning,
}

/// The phase change produced by one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Phase before the event.
    pub from: GesturePhase,
    /// Phase after the event.
    pub to: GesturePhase,
}

impl Transition {
    /// Whether the event actually changed phase.
    #[inline]
    #[must_use]
    pub fn changed(self) -> bool {
        self.from != self.to
    }
}

/// Drives [`InputTracker`] through presses, releases, and the return tween.
#[derive(Clone, Debug)]
pub struct GestureMachine {
    phase: GesturePhase,
    return_tween: Option<Tween>,
    return_duration: Duration,
}

impl GestureMachine {
    /// Creates an idle machine whose return animation runs for
    /// `return_duration`.
    #[must_use]
    pub fn new(return_duration: Duration) -> Self {
        Self {
            phase: GesturePhase::Idle,
            return_tween: None,
            return_duration,
        }
    }

    /// Handles a press at the given position.
    ///
    /// Any in-flight return tween is dropped; the tracker re-anchors at the
    /// press position and subsequent moves take effect immediately, with no
    /// residual interpolation from the cancelled animation.
    pub fn press(&mut self, tracker: &mut InputTracker, x: f64, y: f64) -> Transition {
        let from = self.phase;
        self.return_tween = None;
        tracker.begin_gesture(x, y);
        self.phase = GesturePhase::Active;
        Transition { from, to: self.phase }
    }

    /// Handles a pointer move.
    ///
    /// Returns `true` if the move updated the pointer offset (it only does
    /// while a session is active).
    pub fn drag(&mut self, tracker: &mut InputTracker, x: f64, y: f64) -> bool {
        tracker.update_pointer(x, y)
    }

    /// Handles a release at time `now`.
    ///
    /// From `Active` this starts the return tween at the current pointer
    /// offset; from `Returning` it restarts the tween from wherever the
    /// offset currently is. A release while `Idle` is a no-op (the offset is
    /// already at rest).
    pub fn release(&mut self, tracker: &mut InputTracker, now: HostTime) -> Transition {
        let from = self.phase;
        tracker.end_gesture();
        match self.phase {
            GesturePhase::Idle => {}
            GesturePhase::Active | GesturePhase::Returning => {
                self.return_tween = Some(Tween::new(
                    tracker.pointer_offset(),
                    Vec2::ZERO,
                    now,
                    self.return_duration,
                    Easing::BackOut,
                ));
                self.phase = GesturePhase::Returning;
            }
        }
        Transition { from, to: self.phase }
    }

    /// Advances the return animation to time `now`.
    ///
    /// Called once per frame tick, before offsets are read for composition.
    /// While `Returning` this writes the sampled value into the tracker;
    /// when the tween completes the offset is exactly zero and the machine
    /// settles back to `Idle`. In other phases this is a no-op.
    pub fn advance(&mut self, tracker: &mut InputTracker, now: HostTime) -> Transition {
        let from = self.phase;
        if let Some(tween) = &mut self.return_tween {
            tracker.set_pointer_offset(tween.sample(now));
            if tween.is_finished() {
                self.return_tween = None;
                self.phase = GesturePhase::Idle;
            }
        }
        Transition { from, to: self.phase }
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> (GestureMachine, InputTracker) {
        (GestureMachine::new(Duration(300)), InputTracker::new(23.0))
    }

    #[test]
    fn full_cycle_settles_at_exactly_zero() {
        let (mut gesture, mut tracker) = machine();
        let t = gesture.press(&mut tracker, 100.0, 100.0);
        assert_eq!((t.from, t.to), (GesturePhase::Idle, GesturePhase::Active));
        assert!(gesture.drag(&mut tracker, 80.0, 130.0));
        assert_eq!(tracker.pointer_offset(), Vec2::new(-20.0, 30.0));

        let t = gesture.release(&mut tracker, HostTime(1000));
        assert_eq!((t.from, t.to), (GesturePhase::Active, GesturePhase::Returning));
        assert!(!tracker.is_gesture_active());

        // Mid-flight the offset is somewhere; at the end it is exactly zero.
        let t = gesture.advance(&mut tracker, HostTime(1150));
        assert!(!t.changed());
        let t = gesture.advance(&mut tracker, HostTime(1300));
        assert_eq!((t.from, t.to), (GesturePhase::Returning, GesturePhase::Idle));
        assert_eq!(tracker.pointer_offset(), Vec2::ZERO);
    }

    #[test]
    fn release_while_idle_is_a_no_op() {
        let (mut gesture, mut tracker) = machine();
        let t = gesture.release(&mut tracker, HostTime(0));
        assert_eq!((t.from, t.to), (GesturePhase::Idle, GesturePhase::Idle));
        let t = gesture.advance(&mut tracker, HostTime(100));
        assert!(!t.changed());
        assert_eq!(tracker.pointer_offset(), Vec2::ZERO);
    }

    #[test]
    fn press_cancels_the_return_cleanly() {
        let (mut gesture, mut tracker) = machine();
        gesture.press(&mut tracker, 0.0, 0.0);
        gesture.drag(&mut tracker, 30.0, 0.0);
        gesture.release(&mut tracker, HostTime(0));
        gesture.advance(&mut tracker, HostTime(100));
        let mid = tracker.pointer_offset();
        assert_ne!(mid, Vec2::ZERO);

        let t = gesture.press(&mut tracker, 500.0, 500.0);
        assert_eq!((t.from, t.to), (GesturePhase::Returning, GesturePhase::Active));
        // The cancelled tween must not keep writing.
        gesture.advance(&mut tracker, HostTime(200));
        assert_eq!(tracker.pointer_offset(), mid, "advance must be a no-op while active");
        // And the new session's moves land immediately.
        gesture.drag(&mut tracker, 510.0, 505.0);
        assert_eq!(tracker.pointer_offset(), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn release_while_returning_restarts_from_current_offset() {
        let (mut gesture, mut tracker) = machine();
        gesture.press(&mut tracker, 0.0, 0.0);
        gesture.drag(&mut tracker, 40.0, 0.0);
        gesture.release(&mut tracker, HostTime(0));
        gesture.advance(&mut tracker, HostTime(150));
        let mid = tracker.pointer_offset();

        let t = gesture.release(&mut tracker, HostTime(150));
        assert_eq!((t.from, t.to), (GesturePhase::Returning, GesturePhase::Returning));
        // The restarted tween begins at the mid-flight value...
        assert_eq!(gesture.advance(&mut tracker, HostTime(150)).to, GesturePhase::Returning);
        assert_eq!(tracker.pointer_offset(), mid);
        // ...and runs a full duration from its own start time.
        gesture.advance(&mut tracker, HostTime(449));
        assert_eq!(gesture.phase(), GesturePhase::Returning);
        gesture.advance(&mut tracker, HostTime(450));
        assert_eq!(gesture.phase(), GesturePhase::Idle);
        assert_eq!(tracker.pointer_offset(), Vec2::ZERO);
    }

    #[test]
    fn drag_without_press_changes_nothing() {
        let (mut gesture, mut tracker) = machine();
        assert!(!gesture.drag(&mut tracker, 11.0, 7.0));
        assert_eq!(gesture.phase(), GesturePhase::Idle);
        assert_eq!(tracker.pointer_offset(), Vec2::ZERO);
    }
}
