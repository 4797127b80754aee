// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame composition: the ordered draw list handed to the platform.
//!
//! Once per tick the stage wraps the tracked offsets and the scene into a
//! [`FrameComposition`]. The composition is a complete description of the
//! frame; a [`Compositor`] executes it against a real surface without
//! reading any other state.

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::offset::SurfaceTilt;
use crate::scene::{BlendMode, ImageId};

/// An opaque 8-bit-per-channel color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single draw in the composition.
///
/// Commands are produced in back-to-front order, matching the scene's
/// registration order. The offset is this frame's displacement only; it is
/// recomputed from scratch each tick and never accumulated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    /// The image to draw.
    pub image: ImageId,
    /// Blend state for this draw.
    pub blend: BlendMode,
    /// Uniform opacity in `[0, 1]`.
    pub opacity: f32,
    /// Displacement from the image's resting position.
    pub offset: Vec2,
}

/// Everything the platform needs to draw one frame.
#[derive(Clone, Debug)]
pub struct FrameComposition {
    /// Fill color applied after clearing, before any layer draws.
    pub background: Rgb,
    /// Whole-surface rotation for this frame.
    pub tilt: SurfaceTilt,
    /// Index of the tick this composition was built for.
    pub frame_index: u64,
    /// Draw commands in back-to-front order.
    pub commands: Vec<DrawCommand>,
}

impl FrameComposition {
    /// Creates an empty composition with the given background.
    #[must_use]
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            tilt: SurfaceTilt::ZERO,
            frame_index: 0,
            commands: Vec::new(),
        }
    }

    /// Clears the draw list for reuse, keeping its allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// Executes a [`FrameComposition`] against a platform surface.
///
/// Both the Canvas2D compositor and test doubles implement this trait,
/// enabling generic frame loops.
///
/// # Frame loop pseudocode
///
/// A typical frame callback wires the pieces together like this:
///
/// ```rust,ignore
/// fn on_frame(tick: FrameTick) {
///     // Advance the return animation, recompute every layer's offset.
///     let frame = stage.frame(&tick);
///
///     // Tilt, clear, fill, then draw each command in order.
///     compositor.present(frame);
/// }
/// ```
pub trait Compositor {
    /// Draws one composed frame.
    ///
    /// The required order is: apply `frame.tilt` to the surface, clear,
    /// fill with `frame.background`, then execute `frame.commands`
    /// front-to-back as listed (the list itself is back-to-front).
    fn present(&mut self, frame: &FrameComposition);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_keeps_background_and_capacity() {
        let mut composition = FrameComposition::new(Rgb::new(32, 32, 32));
        composition.commands.push(DrawCommand {
            image: ImageId(0),
            blend: BlendMode::SourceOver,
            opacity: 1.0,
            offset: Vec2::new(1.0, 2.0),
        });
        let capacity = composition.commands.capacity();
        composition.clear();
        assert!(composition.commands.is_empty());
        assert_eq!(composition.commands.capacity(), capacity);
        assert_eq!(composition.background, Rgb::new(32, 32, 32));
    }
}
