// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are converted to microseconds using a [`Timebase`].

use std::io::Write;

use lenticular_core::time::Timebase;
use lenticular_core::trace::{
    BaselineCaptureEvent, FrameComposedEvent, GestureTransitionEvent, ReturnCancelEvent,
    ReturnFinishEvent, ReturnStartEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            timebase,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    fn ticks_to_us(&self, ticks: u64) -> f64 {
        self.timebase.ticks_to_nanos(ticks) as f64 / 1000.0
    }

    fn host_us(&self, t: lenticular_core::time::HostTime) -> f64 {
        self.ticks_to_us(t.ticks())
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_gesture_transition(&mut self, e: &GestureTransitionEvent) {
        let _ = writeln!(self.writer, "[gesture] {:?} -> {:?}", e.from, e.to);
    }

    fn on_return_start(&mut self, e: &ReturnStartEvent) {
        let _ = writeln!(
            self.writer,
            "[return:start] from=({:.1}, {:.1}) duration={:.1}µs at={:.1}µs",
            e.from.x,
            e.from.y,
            self.ticks_to_us(e.duration.ticks()),
            self.host_us(e.at),
        );
    }

    fn on_return_cancel(&mut self, e: &ReturnCancelEvent) {
        let _ = writeln!(
            self.writer,
            "[return:cancel] at_offset=({:.1}, {:.1})",
            e.at_offset.x, e.at_offset.y,
        );
    }

    fn on_return_finish(&mut self, e: &ReturnFinishEvent) {
        let _ = writeln!(
            self.writer,
            "[return:finish] frame={} at={:.1}µs",
            e.frame_index,
            self.host_us(e.at),
        );
    }

    fn on_baseline_capture(&mut self, e: &BaselineCaptureEvent) {
        let _ = writeln!(
            self.writer,
            "[baseline] beta={:.1} gamma={:.1} orientation={:?}",
            e.beta, e.gamma, e.orientation,
        );
    }

    fn on_frame_composed(&mut self, e: &FrameComposedEvent) {
        let _ = writeln!(
            self.writer,
            "[frame] index={} now={:.1}µs pointer=({:.1}, {:.1}) motion=({:.1}, {:.1}) \
             rotate=({:.2}°, {:.2}°) draws={}",
            e.frame_index,
            self.host_us(e.now),
            e.pointer.x,
            e.pointer.y,
            e.motion.x,
            e.motion.y,
            e.tilt.rotate_x,
            e.tilt.rotate_y,
            e.draws,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use lenticular_core::gesture::GesturePhase;
    use lenticular_core::time::{Duration, HostTime};

    #[test]
    fn pretty_print_transition() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_gesture_transition(&GestureTransitionEvent {
            from: GesturePhase::Idle,
            to: GesturePhase::Active,
        });
        let output = String::from_utf8(sink.writer).unwrap();
        assert!(output.contains("[gesture]"), "got: {output}");
        assert!(output.contains("Idle -> Active"), "got: {output}");
    }

    #[test]
    fn pretty_print_return_start_converts_ticks() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_return_start(&ReturnStartEvent {
            from: Vec2::new(-20.0, 30.0),
            duration: Duration(300_000_000),
            at: HostTime(1_000_000),
        });
        let output = String::from_utf8(sink.writer).unwrap();
        assert!(output.contains("[return:start]"), "got: {output}");
        // 300 ms in nanosecond ticks prints as 300000.0µs.
        assert!(output.contains("duration=300000.0µs"), "got: {output}");
    }
}
