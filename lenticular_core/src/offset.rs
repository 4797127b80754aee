// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-layer displacement and whole-surface tilt.
//!
//! These are pure functions of the two tracked offsets; they hold no state
//! and read no clocks. Layer displacement is linear in both inputs and in
//! depth, so doubling an input offset doubles every layer's slide while
//! keeping their relative separation, which is what sells the depth
//! illusion.

use kurbo::Vec2;

use crate::compose::Rgb;

/// Degrees of surface tilt per unit of pointer offset.
const POINTER_TILT_WEIGHT: f64 = 0.15;

/// Degrees of surface tilt per unit of motion offset.
const MOTION_TILT_WEIGHT: f64 = 1.2;

/// The scene-wide tuning constants.
///
/// These are fixed at startup; [`Tuning::DEFAULT`] carries the values the
/// artwork was calibrated against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    /// Scales the pointer offset's contribution to layer displacement.
    pub touch_mult: f64,
    /// Scales the motion offset's contribution to layer displacement.
    ///
    /// Tilt angles are numerically small next to pixel drags, so this is
    /// roughly an order of magnitude above `touch_mult`.
    pub motion_mult: f64,
    /// Bound on each motion offset component, in offset units.
    pub max_motion_offset: f64,
    /// Length of the release return animation, in milliseconds.
    pub return_duration_ms: u64,
    /// Color the surface is filled with before layers are drawn.
    pub background: Rgb,
}

impl Tuning {
    /// The calibration the artwork ships with.
    pub const DEFAULT: Self = Self {
        touch_mult: 0.35,
        motion_mult: 2.5,
        max_motion_offset: 23.0,
        return_duration_ms: 300,
        background: Rgb::new(32, 32, 32),
    };
}

impl Default for Tuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Rotation of the whole surface, in degrees per axis.
///
/// Applied uniformly to the rendered surface on top of the per-layer
/// offsets; it does not affect layer positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceTilt {
    /// Rotation about the horizontal axis.
    pub rotate_x: f64,
    /// Rotation about the vertical axis.
    pub rotate_y: f64,
}

impl SurfaceTilt {
    /// No tilt.
    pub const ZERO: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };
}

/// Computes one layer's displacement from the current offsets.
///
/// Both contributions scale with the layer's depth and sum component-wise:
/// `offset = pointer * depth * touch_mult + motion * depth * motion_mult`.
#[inline]
#[must_use]
pub fn layer_offset(depth: f64, pointer: Vec2, motion: Vec2, tuning: &Tuning) -> Vec2 {
    Vec2::new(
        pointer.x * depth * tuning.touch_mult + motion.x * depth * tuning.motion_mult,
        pointer.y * depth * tuning.touch_mult + motion.y * depth * tuning.motion_mult,
    )
}

/// Computes the whole-surface tilt from the current offsets.
///
/// Horizontal input rocks the surface about its vertical axis and vertical
/// input about its horizontal axis; the pointer's vertical contribution is
/// negated so that dragging downward tips the top of the surface away.
#[inline]
#[must_use]
pub fn surface_tilt(pointer: Vec2, motion: Vec2) -> SurfaceTilt {
    SurfaceTilt {
        rotate_x: pointer.y * -POINTER_TILT_WEIGHT + motion.y * MOTION_TILT_WEIGHT,
        rotate_y: pointer.x * POINTER_TILT_WEIGHT + motion.x * MOTION_TILT_WEIGHT,
    }
}
