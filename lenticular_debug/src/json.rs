// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON-lines trace export.
//!
//! [`JsonLinesSink`] implements [`TraceSink`] and writes one JSON object per
//! event, newline-delimited, to a [`Write`](std::io::Write) destination. The
//! format suits `jq` pipelines and log collectors. Timestamps are converted
//! to microseconds using a [`Timebase`].

use std::io::Write;

use serde_json::json;

use lenticular_core::time::Timebase;
use lenticular_core::trace::{
    BaselineCaptureEvent, FrameComposedEvent, GestureTransitionEvent, ReturnCancelEvent,
    ReturnFinishEvent, ReturnStartEvent, TraceSink,
};

/// Writes newline-delimited JSON trace events to a
/// [`Write`](std::io::Write) destination.
pub struct JsonLinesSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl JsonLinesSink {
    /// Creates a sink that writes to stdout.
    #[must_use]
    pub fn stdout(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stdout()),
            timebase,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    fn ticks_to_us(&self, ticks: u64) -> f64 {
        self.timebase.ticks_to_nanos(ticks) as f64 / 1000.0
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_gesture_transition(&mut self, e: &GestureTransitionEvent) {
        let _ = writeln!(
            self.writer,
            "{}",
            json!({
                "event": "gesture_transition",
                "from": format!("{:?}", e.from),
                "to": format!("{:?}", e.to),
            })
        );
    }

    fn on_return_start(&mut self, e: &ReturnStartEvent) {
        let _ = writeln!(
            self.writer,
            "{}",
            json!({
                "event": "return_start",
                "from": [e.from.x, e.from.y],
                "duration_us": self.ticks_to_us(e.duration.ticks()),
                "ts": self.ticks_to_us(e.at.ticks()),
            })
        );
    }

    fn on_return_cancel(&mut self, e: &ReturnCancelEvent) {
        let _ = writeln!(
            self.writer,
            "{}",
            json!({
                "event": "return_cancel",
                "at_offset": [e.at_offset.x, e.at_offset.y],
            })
        );
    }

    fn on_return_finish(&mut self, e: &ReturnFinishEvent) {
        let _ = writeln!(
            self.writer,
            "{}",
            json!({
                "event": "return_finish",
                "frame_index": e.frame_index,
                "ts": self.ticks_to_us(e.at.ticks()),
            })
        );
    }

    fn on_baseline_capture(&mut self, e: &BaselineCaptureEvent) {
        let _ = writeln!(
            self.writer,
            "{}",
            json!({
                "event": "baseline_capture",
                "beta": e.beta,
                "gamma": e.gamma,
                "orientation": format!("{:?}", e.orientation),
            })
        );
    }

    fn on_frame_composed(&mut self, e: &FrameComposedEvent) {
        let _ = writeln!(
            self.writer,
            "{}",
            json!({
                "event": "frame_composed",
                "frame_index": e.frame_index,
                "ts": self.ticks_to_us(e.now.ticks()),
                "pointer": [e.pointer.x, e.pointer.y],
                "motion": [e.motion.x, e.motion.y],
                "rotate_x": e.tilt.rotate_x,
                "rotate_y": e.tilt.rotate_y,
                "draws": e.draws,
            })
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use lenticular_core::gesture::GesturePhase;
    use lenticular_core::offset::SurfaceTilt;
    use lenticular_core::time::HostTime;
    use serde_json::Value;

    #[test]
    fn lines_parse_back_as_json() {
        let mut sink = JsonLinesSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_gesture_transition(&GestureTransitionEvent {
            from: GesturePhase::Active,
            to: GesturePhase::Returning,
        });
        sink.on_frame_composed(&FrameComposedEvent {
            frame_index: 7,
            now: HostTime(16_666_667),
            pointer: Vec2::new(-20.0, 30.0),
            motion: Vec2::ZERO,
            tilt: SurfaceTilt {
                rotate_x: -4.5,
                rotate_y: 3.0,
            },
            draws: 10,
        });

        let output = String::from_utf8(sink.writer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "gesture_transition");
        assert_eq!(first["from"], "Active");
        assert_eq!(first["to"], "Returning");

        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["event"], "frame_composed");
        assert_eq!(second["frame_index"], 7);
        assert_eq!(second["pointer"][0], -20.0);
        assert_eq!(second["draws"], 10);
    }
}
