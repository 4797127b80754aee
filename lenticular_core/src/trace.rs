// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the interaction loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods covering
//! gesture phase changes, the return animation's lifecycle, motion baseline
//! captures, and per-frame composition summaries. All method bodies default
//! to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use kurbo::Vec2;

use crate::compose::FrameComposition;
use crate::gesture::GesturePhase;
use crate::input::Orientation;
use crate::offset::SurfaceTilt;
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when an input event changes the gesture phase.
#[derive(Clone, Copy, Debug)]
pub struct GestureTransitionEvent {
    /// Phase before the event.
    pub from: GesturePhase,
    /// Phase after the event.
    pub to: GesturePhase,
}

/// Emitted when a release starts (or restarts) the return animation.
#[derive(Clone, Copy, Debug)]
pub struct ReturnStartEvent {
    /// Pointer offset the animation starts from.
    pub from: Vec2,
    /// Length of the animation in host ticks.
    pub duration: Duration,
    /// Host time of the release.
    pub at: HostTime,
}

/// Emitted when a new press cancels an in-flight return animation.
#[derive(Clone, Copy, Debug)]
pub struct ReturnCancelEvent {
    /// Pointer offset at the moment of cancellation.
    pub at_offset: Vec2,
}

/// Emitted on the tick where the return animation settles at zero.
#[derive(Clone, Copy, Debug)]
pub struct ReturnFinishEvent {
    /// Index of the settling tick.
    pub frame_index: u64,
    /// The tick's timestamp.
    pub at: HostTime,
}

/// Emitted when an orientation reading captures a fresh motion baseline.
#[derive(Clone, Copy, Debug)]
pub struct BaselineCaptureEvent {
    /// Raw front-back angle stored as the baseline.
    pub beta: f64,
    /// Raw left-right angle stored as the baseline.
    pub gamma: f64,
    /// Orientation class at capture time.
    pub orientation: Orientation,
}

/// Per-frame composition summary.
#[derive(Clone, Copy, Debug)]
pub struct FrameComposedEvent {
    /// Frame counter.
    pub frame_index: u64,
    /// The tick's timestamp.
    pub now: HostTime,
    /// Pointer offset the frame was composed from.
    pub pointer: Vec2,
    /// Motion offset the frame was composed from.
    pub motion: Vec2,
    /// Whole-surface tilt for the frame.
    pub tilt: SurfaceTilt,
    /// Number of draw commands.
    pub draws: usize,
}

impl FrameComposedEvent {
    /// Creates a `FrameComposedEvent` from a composition plus the offsets it
    /// was built from (which the composition itself does not carry).
    #[must_use]
    pub fn new(frame: &FrameComposition, now: HostTime, pointer: Vec2, motion: Vec2) -> Self {
        Self {
            frame_index: frame.frame_index,
            now,
            pointer,
            motion,
            tilt: frame.tilt,
            draws: frame.commands.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the interaction loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the gesture phase changes.
    fn on_gesture_transition(&mut self, e: &GestureTransitionEvent) {
        _ = e;
    }

    /// Called when the return animation starts or restarts.
    fn on_return_start(&mut self, e: &ReturnStartEvent) {
        _ = e;
    }

    /// Called when a press cancels the return animation.
    fn on_return_cancel(&mut self, e: &ReturnCancelEvent) {
        _ = e;
    }

    /// Called when the return animation settles at zero.
    fn on_return_finish(&mut self, e: &ReturnFinishEvent) {
        _ = e;
    }

    /// Called when a motion baseline is captured.
    fn on_baseline_capture(&mut self, e: &BaselineCaptureEvent) {
        _ = e;
    }

    /// Called with a per-frame composition summary.
    fn on_frame_composed(&mut self, e: &FrameComposedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`GestureTransitionEvent`].
    #[inline]
    pub fn gesture_transition(&mut self, e: &GestureTransitionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_gesture_transition(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ReturnStartEvent`].
    #[inline]
    pub fn return_start(&mut self, e: &ReturnStartEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_return_start(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ReturnCancelEvent`].
    #[inline]
    pub fn return_cancel(&mut self, e: &ReturnCancelEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_return_cancel(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ReturnFinishEvent`].
    #[inline]
    pub fn return_finish(&mut self, e: &ReturnFinishEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_return_finish(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`BaselineCaptureEvent`].
    #[inline]
    pub fn baseline_capture(&mut self, e: &BaselineCaptureEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_baseline_capture(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameComposedEvent`].
    #[inline]
    pub fn frame_composed(&mut self, e: &FrameComposedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame_composed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{DrawCommand, Rgb};
    use crate::scene::{BlendMode, ImageId};

    fn sample_composed() -> FrameComposedEvent {
        let mut frame = FrameComposition::new(Rgb::new(32, 32, 32));
        frame.frame_index = 42;
        frame.tilt = SurfaceTilt {
            rotate_x: -0.6,
            rotate_y: 2.7,
        };
        frame.commands.push(DrawCommand {
            image: ImageId(0),
            blend: BlendMode::SourceOver,
            opacity: 1.0,
            offset: Vec2::new(-7.0, 0.0),
        });
        FrameComposedEvent::new(&frame, HostTime(1_000_000), Vec2::new(10.0, 0.0), Vec2::ZERO)
    }

    #[test]
    fn composed_event_copies_frame_fields() {
        let evt = sample_composed();
        assert_eq!(evt.frame_index, 42);
        assert_eq!(evt.draws, 1);
        assert_eq!(evt.pointer, Vec2::new(10.0, 0.0));
        assert_eq!(evt.tilt.rotate_y, 2.7);
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_gesture_transition(&GestureTransitionEvent {
            from: GesturePhase::Idle,
            to: GesturePhase::Active,
        });
        sink.on_baseline_capture(&BaselineCaptureEvent {
            beta: 10.0,
            gamma: 5.0,
            orientation: Orientation::Portrait,
        });
        sink.on_frame_composed(&sample_composed());
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.frame_composed(&sample_composed());
        tracer.return_cancel(&ReturnCancelEvent {
            at_offset: Vec2::new(1.0, -1.0),
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            frames: Vec<u64>,
        }
        impl TraceSink for RecordingSink {
            fn on_frame_composed(&mut self, e: &FrameComposedEvent) {
                self.frames.push(e.frame_index);
            }
        }

        let mut sink = RecordingSink { frames: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.frame_composed(&sample_composed());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.frames, &[42]);
    }
}
