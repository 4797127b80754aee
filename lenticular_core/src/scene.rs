// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layer registry: an ordered, immutable description of the artwork.
//!
//! A [`Scene`] is configured once at startup and never mutated afterwards.
//! Layers are stored back-to-front; registration order is draw order. Each
//! layer pairs an image handle with the depth factor that scales its
//! displacement, plus the blend state the compositor applies when drawing it.

use alloc::vec::Vec;
use core::fmt;

/// Identifies one image asset within a scene.
///
/// The id is an index into the backend's asset table, assigned in
/// registration order. The core never dereferences it; only the platform
/// compositor resolves it to a decoded image.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageId(pub u32);

impl fmt::Debug for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageId({})", self.0)
    }
}

/// How a layer's pixels combine with the pixels beneath it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Standard alpha compositing (the CSS/canvas "normal" mode).
    #[default]
    SourceOver,
    /// Multiplies source and destination channels; used for shadows.
    Multiply,
    /// Inverse-multiplies channels, lightening the result.
    Screen,
}

/// One layer of the artwork: an image plus its depth and blend state.
///
/// `depth` scales how far the layer slides per unit of input offset.
/// Negative depths move against the pointer, positive depths with it, and a
/// depth of zero pins the layer in place. Larger magnitudes read as nearer
/// to the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSpec {
    /// The image drawn for this layer.
    pub image: ImageId,
    /// Displacement multiplier applied to both pointer and tilt offsets.
    pub depth: f64,
    /// Blend state used when drawing the layer.
    pub blend: BlendMode,
    /// Uniform opacity in `[0, 1]`.
    pub opacity: f32,
}

impl LayerSpec {
    /// Creates a fully opaque, source-over layer.
    #[inline]
    #[must_use]
    pub const fn new(image: ImageId, depth: f64) -> Self {
        Self {
            image,
            depth,
            blend: BlendMode::SourceOver,
            opacity: 1.0,
        }
    }

    /// Sets the blend mode.
    #[inline]
    #[must_use]
    pub const fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    /// Sets the opacity.
    #[inline]
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// An ordered set of layers, back-to-front.
#[derive(Clone, Debug)]
pub struct Scene {
    layers: Vec<LayerSpec>,
}

impl Scene {
    /// Creates a scene from a back-to-front layer list.
    ///
    /// Opacities are clamped into `[0, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if any layer's depth or opacity is not finite.
    #[must_use]
    pub fn new(mut layers: Vec<LayerSpec>) -> Self {
        for layer in &mut layers {
            assert!(layer.depth.is_finite(), "layer depth must be finite");
            assert!(layer.opacity.is_finite(), "layer opacity must be finite");
            layer.opacity = layer.opacity.clamp(0.0, 1.0);
        }
        Self { layers }
    }

    /// The layers, in draw order.
    #[inline]
    #[must_use]
    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    /// Number of layers in the scene.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the scene has no layers.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn registration_order_is_draw_order() {
        let scene = Scene::new(vec![
            LayerSpec::new(ImageId(0), -3.0),
            LayerSpec::new(ImageId(1), -1.0),
            LayerSpec::new(ImageId(2), 1.5),
        ]);
        let ids: Vec<u32> = scene.layers().iter().map(|l| l.image.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(scene.len(), 3);
        assert!(!scene.is_empty());
    }

    #[test]
    fn opacity_clamped_at_construction() {
        let scene = Scene::new(vec![
            LayerSpec::new(ImageId(0), 0.0).with_opacity(1.8),
            LayerSpec::new(ImageId(1), 0.0).with_opacity(-0.2),
        ]);
        assert_eq!(scene.layers()[0].opacity, 1.0);
        assert_eq!(scene.layers()[1].opacity, 0.0);
    }

    #[test]
    fn builder_keeps_blend_and_opacity() {
        let layer = LayerSpec::new(ImageId(3), -1.5)
            .with_blend(BlendMode::Multiply)
            .with_opacity(0.75);
        assert_eq!(layer.blend, BlendMode::Multiply);
        assert_eq!(layer.opacity, 0.75);
        assert_eq!(LayerSpec::new(ImageId(0), 0.0).blend, BlendMode::SourceOver);
    }

    #[test]
    #[should_panic(expected = "layer depth must be finite")]
    fn non_finite_depth_rejected() {
        let _ = Scene::new(vec![LayerSpec::new(ImageId(0), f64::NAN)]);
    }

    #[test]
    #[should_panic(expected = "layer opacity must be finite")]
    fn non_finite_opacity_rejected() {
        let _ = Scene::new(vec![LayerSpec::new(ImageId(0), 0.0).with_opacity(f32::NAN)]);
    }
}
