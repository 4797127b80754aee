// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated interaction loop that exercises the tracing pipeline.
//!
//! Runs 180 synthetic frames through a [`Stage`]: a scripted drag with a
//! mid-return cancellation, plus a sine-sweep tilt signal. Events go to a
//! [`PrettyPrintSink`](lenticular_debug::pretty::PrettyPrintSink) on stdout
//! and a [`JsonLinesSink`](lenticular_debug::json::JsonLinesSink) writing
//! `trace.jsonl`.

use std::fs::File;
use std::io::BufWriter;

use lenticular_core::gesture::{GesturePhase, Transition};
use lenticular_core::input::Orientation;
use lenticular_core::offset::Tuning;
use lenticular_core::stage::Stage;
use lenticular_core::time::{Duration, HostTime, Timebase};
use lenticular_core::timing::FrameTick;
use lenticular_core::trace::{
    BaselineCaptureEvent, FrameComposedEvent, GestureTransitionEvent, ReturnCancelEvent,
    ReturnFinishEvent, ReturnStartEvent, TraceSink, Tracer,
};

use lenticular_debug::json::JsonLinesSink;
use lenticular_debug::pretty::PrettyPrintSink;

use parallax_common::{PointerAction, monster_scene, pointer_script, tilt_sweep};

const FRAME_COUNT: u64 = 180;
/// 16.6ms refresh interval in nanoseconds (≈60 Hz).
const REFRESH_INTERVAL_NS: u64 = 16_666_667;

fn main() {
    let timebase = Timebase::NANOS;

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()), timebase);
    let path = "trace.jsonl";
    let file = File::create(path).expect("failed to create trace.jsonl");
    let mut json = JsonLinesSink::new(Box::new(BufWriter::new(file)), timebase);

    // -- stage -------------------------------------------------------------
    let tuning = Tuning::DEFAULT;
    let return_duration = Duration::from_millis(tuning.return_duration_ms, timebase);
    let mut stage = Stage::new(monster_scene(), tuning, timebase);

    // -- simulated loop ----------------------------------------------------
    let start_ticks: u64 = 1_000_000_000; // start at 1s
    let mut now_ticks = start_ticks;

    for frame_index in 0..FRAME_COUNT {
        let now = HostTime(now_ticks);

        // 1. Scripted pointer input.
        match pointer_script(frame_index) {
            Some(PointerAction::Press { x, y }) => {
                let transition = stage.pointer_pressed(x, y);
                if transition.from == GesturePhase::Returning {
                    let e = ReturnCancelEvent {
                        at_offset: stage.tracker().pointer_offset(),
                    };
                    pretty.on_return_cancel(&e);
                    json.on_return_cancel(&e);
                }
                emit_transition(&mut pretty, &mut json, transition);
            }
            Some(PointerAction::Drag { x, y }) => {
                stage.pointer_moved(x, y);
            }
            Some(PointerAction::Release) => {
                let transition = stage.pointer_released(now);
                emit_transition(&mut pretty, &mut json, transition);
                if transition.to == GesturePhase::Returning {
                    let e = ReturnStartEvent {
                        from: stage.tracker().pointer_offset(),
                        duration: return_duration,
                        at: now,
                    };
                    pretty.on_return_start(&e);
                    json.on_return_start(&e);
                }
            }
            None => {}
        }

        // 2. Synthetic tilt.
        let t = timebase.ticks_to_nanos(now_ticks - start_ticks) as f64 / 1_000_000_000.0;
        let (beta, gamma) = tilt_sweep(t);
        if stage.motion_updated(beta, gamma, Orientation::Portrait) {
            let e = BaselineCaptureEvent {
                beta,
                gamma,
                orientation: Orientation::Portrait,
            };
            pretty.on_baseline_capture(&e);
            json.on_baseline_capture(&e);
        }

        // 3. Compose.
        let phase_before = stage.phase();
        let tick = FrameTick {
            now,
            frame_index,
            refresh_interval: Some(REFRESH_INTERVAL_NS),
        };
        stage.frame(&tick);
        if phase_before == GesturePhase::Returning && stage.phase() == GesturePhase::Idle {
            let e = ReturnFinishEvent {
                frame_index,
                at: now,
            };
            pretty.on_return_finish(&e);
            json.on_return_finish(&e);
            emit_transition(
                &mut pretty,
                &mut json,
                Transition {
                    from: GesturePhase::Returning,
                    to: GesturePhase::Idle,
                },
            );
        }

        let composed = FrameComposedEvent::new(
            stage.composition(),
            now,
            stage.tracker().pointer_offset(),
            stage.tracker().motion_offset(),
        );
        pretty.on_frame_composed(&composed);
        json.on_frame_composed(&composed);

        // Also exercise the Tracer wrapper (just to prove it compiles and
        // dispatches).
        if frame_index == 0 {
            let mut tracer = Tracer::new(&mut pretty);
            tracer.frame_composed(&composed);
        }

        // Advance time.
        now_ticks += REFRESH_INTERVAL_NS;
    }

    println!("Composed {FRAME_COUNT} frames; wrote {path}");
}

fn emit_transition(pretty: &mut PrettyPrintSink, json: &mut JsonLinesSink, transition: Transition) {
    if !transition.changed() {
        return;
    }
    let e = GestureTransitionEvent {
        from: transition.from,
        to: transition.to,
    };
    pretty.on_gesture_transition(&e);
    json.on_gesture_transition(&e);
}
