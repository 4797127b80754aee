// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stage: one artwork's scene, input state, and frame production.
//!
//! [`Stage`] is the piece application code talks to. Backends feed it raw
//! input events as they arrive and call [`Stage::frame`] once per display
//! tick; it hands back a [`FrameComposition`] for the platform compositor.
//! Input mutates tracker state immediately, but nothing is drawn outside
//! [`Stage::frame`], so event bursts between two ticks cost no extra
//! rendering.

use crate::compose::{DrawCommand, FrameComposition};
use crate::gesture::{GestureMachine, GesturePhase, Transition};
use crate::input::{InputTracker, Orientation};
use crate::offset::{self, Tuning};
use crate::scene::Scene;
use crate::time::{Duration, HostTime, Timebase};
use crate::timing::FrameTick;

/// Owns a scene and drives it from input events to frame compositions.
#[derive(Clone, Debug)]
pub struct Stage {
    scene: Scene,
    tuning: Tuning,
    tracker: InputTracker,
    gesture: GestureMachine,
    composition: FrameComposition,
}

impl Stage {
    /// Creates a stage for `scene` with the given tuning.
    ///
    /// `timebase` must match the clock behind the timestamps later passed to
    /// [`release`](Self::pointer_released) and [`frame`](Self::frame); it is
    /// used once here to convert the return duration into host ticks.
    #[must_use]
    pub fn new(scene: Scene, tuning: Tuning, timebase: Timebase) -> Self {
        let return_duration = Duration::from_millis(tuning.return_duration_ms, timebase);
        Self {
            tracker: InputTracker::new(tuning.max_motion_offset),
            gesture: GestureMachine::new(return_duration),
            composition: FrameComposition::new(tuning.background),
            scene,
            tuning,
        }
    }

    /// Handles a press on the artwork surface.
    pub fn pointer_pressed(&mut self, x: f64, y: f64) -> Transition {
        self.gesture.press(&mut self.tracker, x, y)
    }

    /// Handles a pointer move anywhere on the page.
    ///
    /// Returns `true` if the move updated the pointer offset.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        self.gesture.drag(&mut self.tracker, x, y)
    }

    /// Handles a release at time `now`, starting the return animation.
    pub fn pointer_released(&mut self, now: HostTime) -> Transition {
        self.gesture.release(&mut self.tracker, now)
    }

    /// Folds one device-orientation reading into the motion offset.
    ///
    /// Returns `true` if this reading captured a fresh baseline.
    pub fn motion_updated(&mut self, beta: f64, gamma: f64, orientation: Orientation) -> bool {
        self.tracker.update_motion(beta, gamma, orientation)
    }

    /// Handles a change of the device's orientation class.
    ///
    /// The motion baseline is discarded; the next reading measures tilt
    /// relative to how the device is newly held.
    pub fn orientation_changed(&mut self) {
        self.tracker.reset_motion_baseline();
    }

    /// Composes the frame for one tick.
    ///
    /// Per tick, in order: advance the return animation to `tick.now`, derive
    /// the whole-surface tilt, then emit one draw command per scene layer
    /// with its displacement recomputed from the current offsets. The
    /// returned composition is valid until the next call.
    pub fn frame(&mut self, tick: &FrameTick) -> &FrameComposition {
        self.gesture.advance(&mut self.tracker, tick.now);
        let pointer = self.tracker.pointer_offset();
        let motion = self.tracker.motion_offset();

        self.composition.tilt = offset::surface_tilt(pointer, motion);
        self.composition.frame_index = tick.frame_index;
        self.composition.clear();
        for layer in self.scene.layers() {
            self.composition.commands.push(DrawCommand {
                image: layer.image,
                blend: layer.blend,
                opacity: layer.opacity,
                offset: offset::layer_offset(layer.depth, pointer, motion, &self.tuning),
            });
        }
        &self.composition
    }

    /// The composition built by the most recent [`frame`](Self::frame) call.
    #[inline]
    #[must_use]
    pub fn composition(&self) -> &FrameComposition {
        &self.composition
    }

    /// Current gesture phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// The input tracker's current state.
    #[inline]
    #[must_use]
    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    /// The scene this stage composes.
    #[inline]
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The tuning constants this stage was built with.
    #[inline]
    #[must_use]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{BlendMode, ImageId, LayerSpec};
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Vec2;

    fn test_scene() -> Scene {
        Scene::new(vec![
            LayerSpec::new(ImageId(0), -2.0),
            LayerSpec::new(ImageId(1), 0.0),
            LayerSpec::new(ImageId(2), 1.5).with_blend(BlendMode::Multiply).with_opacity(0.75),
        ])
    }

    fn tick(now: u64, frame_index: u64) -> FrameTick {
        FrameTick {
            now: HostTime(now),
            frame_index,
            refresh_interval: Some(16_666_667),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn composes_one_command_per_layer_in_order() {
        let mut stage = Stage::new(test_scene(), Tuning::DEFAULT, Timebase::NANOS);
        let frame = stage.frame(&tick(0, 7));
        assert_eq!(frame.frame_index, 7);
        assert_eq!(frame.commands.len(), 3);
        let ids: Vec<u32> = frame.commands.iter().map(|c| c.image.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(frame.commands[2].blend, BlendMode::Multiply);
        assert_eq!(frame.commands[2].opacity, 0.75);
    }

    #[test]
    fn drag_displaces_layers_by_depth() {
        let mut stage = Stage::new(test_scene(), Tuning::DEFAULT, Timebase::NANOS);
        stage.pointer_pressed(100.0, 100.0);
        assert!(stage.pointer_moved(110.0, 100.0));
        let frame = stage.frame(&tick(0, 0));
        // depth −2 at pointer {10, 0} → −7; depth 0 stays pinned.
        assert!(close(frame.commands[0].offset.x, -7.0));
        assert_eq!(frame.commands[1].offset, Vec2::ZERO);
        assert!(close(frame.commands[2].offset.x, 10.0 * 1.5 * 0.35));
        // Horizontal drag rocks the surface about the vertical axis only.
        assert!(close(frame.tilt.rotate_y, 10.0 * 0.15));
        assert!(close(frame.tilt.rotate_x, 0.0));
    }

    #[test]
    fn release_returns_to_rest_within_the_configured_duration() {
        let mut stage = Stage::new(test_scene(), Tuning::DEFAULT, Timebase::NANOS);
        stage.pointer_pressed(0.0, 0.0);
        stage.pointer_moved(40.0, -20.0);
        stage.pointer_released(HostTime(0));
        assert_eq!(stage.phase(), GesturePhase::Returning);

        // 300 ms at nanosecond ticks.
        stage.frame(&tick(150_000_000, 1));
        assert_eq!(stage.phase(), GesturePhase::Returning);
        stage.frame(&tick(300_000_000, 2));
        assert_eq!(stage.phase(), GesturePhase::Idle);
        assert_eq!(stage.tracker().pointer_offset(), Vec2::ZERO);
        let frame = stage.composition();
        assert_eq!(frame.commands[0].offset, Vec2::ZERO, "layers at rest after the return");
    }

    #[test]
    fn motion_and_pointer_contributions_sum() {
        let mut stage = Stage::new(test_scene(), Tuning::DEFAULT, Timebase::NANOS);
        stage.motion_updated(0.0, 0.0, Orientation::Portrait);
        stage.motion_updated(2.0, 4.0, Orientation::Portrait);
        stage.pointer_pressed(0.0, 0.0);
        stage.pointer_moved(10.0, 0.0);
        let frame = stage.frame(&tick(0, 0));
        // x: 10·(−2)·0.35 + 4·(−2)·2.5 ; y: 0 + 2·(−2)·2.5
        assert!(close(frame.commands[0].offset.x, -7.0 - 20.0));
        assert!(close(frame.commands[0].offset.y, -10.0));
    }

    #[test]
    fn orientation_change_rebases_tilt() {
        let mut stage = Stage::new(test_scene(), Tuning::DEFAULT, Timebase::NANOS);
        stage.motion_updated(0.0, 0.0, Orientation::Portrait);
        stage.motion_updated(0.0, 8.0, Orientation::Portrait);
        assert_eq!(stage.tracker().motion_offset(), Vec2::new(8.0, 0.0));

        stage.orientation_changed();
        assert!(stage.motion_updated(0.0, 8.0, Orientation::LandscapeLeft));
        assert_eq!(stage.tracker().motion_offset(), Vec2::ZERO, "same reading is the new rest pose");
    }

    #[test]
    fn composition_allocation_is_reused() {
        let mut stage = Stage::new(test_scene(), Tuning::DEFAULT, Timebase::NANOS);
        stage.frame(&tick(0, 0));
        let capacity = stage.composition().commands.capacity();
        for i in 1..32 {
            stage.frame(&tick(i * 16_666_667, i));
        }
        assert_eq!(stage.composition().commands.capacity(), capacity);
        assert_eq!(stage.composition().frame_index, 31);
    }

    #[test]
    fn empty_scene_composes_empty_frames() {
        let mut stage = Stage::new(Scene::new(vec![]), Tuning::DEFAULT, Timebase::NANOS);
        let frame = stage.frame(&tick(0, 0));
        assert!(frame.commands.is_empty());
        assert_eq!(frame.tilt, crate::offset::SurfaceTilt::ZERO);
    }
}
