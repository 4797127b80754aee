// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scene and scripted input for the parallax examples.
//!
//! The scene is the ten-layer "rocket monster" illustration. Asset paths in
//! [`LAYER_ASSETS`] line up with the [`ImageId`]s in [`MONSTER_LAYERS`], so
//! a loader can fetch the list and hand the elements straight to a
//! compositor.

#![no_std]

extern crate alloc;

use lenticular_core::scene::{BlendMode, ImageId, LayerSpec, Scene};

/// Asset URLs, indexed by [`ImageId`], back-to-front.
pub const LAYER_ASSETS: [&str; 10] = [
    "img/layer_1_planet.png",
    "img/layer_2_rocket.png",
    "img/layer_3_stripe.png",
    "img/layer_4_monster_shadow.png",
    "img/layer_5_planet2.png",
    "img/layer_6_monster.png",
    "img/layer_7_monster_cheeks.png",
    "img/layer_8_monster_hands.png",
    "img/layer_9_mask.png",
    "img/layer_10_float.png",
];

/// The illustration's layers, back-to-front.
///
/// Depths straddle the focal plane: the far planet at −3.5 slides hardest
/// against the pointer, the mask at 0 is pinned, and the floating fluff at
/// 1.5 leads the pointer. The stripe is translucent and the monster's
/// shadow multiplies onto the planet beneath it.
pub const MONSTER_LAYERS: [LayerSpec; 10] = [
    LayerSpec::new(ImageId(0), -3.5),
    LayerSpec::new(ImageId(1), -2.0),
    LayerSpec::new(ImageId(2), -2.5).with_opacity(0.6),
    LayerSpec::new(ImageId(3), -1.5)
        .with_blend(BlendMode::Multiply)
        .with_opacity(0.75),
    LayerSpec::new(ImageId(4), -1.2),
    LayerSpec::new(ImageId(5), -1.0),
    LayerSpec::new(ImageId(6), -0.8),
    LayerSpec::new(ImageId(7), -0.3),
    LayerSpec::new(ImageId(8), 0.0),
    LayerSpec::new(ImageId(9), 1.5),
];

/// Builds the monster illustration scene.
#[must_use]
pub fn monster_scene() -> Scene {
    Scene::new(MONSTER_LAYERS.to_vec())
}

/// One scripted pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerAction {
    /// Press at viewport coordinates.
    Press {
        /// Horizontal press position.
        x: f64,
        /// Vertical press position.
        y: f64,
    },
    /// Move to viewport coordinates while pressed.
    Drag {
        /// Horizontal drag position.
        x: f64,
        /// Vertical drag position.
        y: f64,
    },
    /// Release the pointer.
    Release,
}

/// Scripted drag choreography for a headless run, keyed by frame index.
///
/// The script presses at frame 30, drags out over thirty frames, holds,
/// and releases at frame 90. A second press at frame 100 lands while the
/// first release's return animation is still in flight, so it cancels the
/// animation mid-run; the second release at 130 lets it finish.
#[must_use]
pub fn pointer_script(frame: u64) -> Option<PointerAction> {
    match frame {
        30 => Some(PointerAction::Press { x: 100.0, y: 100.0 }),
        31..=60 => {
            let t = (frame - 30) as f64 / 30.0;
            Some(PointerAction::Drag {
                x: 100.0 - 20.0 * t,
                y: 100.0 + 30.0 * t,
            })
        }
        90 => Some(PointerAction::Release),
        100 => Some(PointerAction::Press { x: 50.0, y: 50.0 }),
        101..=125 => {
            let t = (frame - 100) as f64 / 25.0;
            Some(PointerAction::Drag {
                x: 50.0 + 15.0 * t,
                y: 50.0 + 30.0 * t,
            })
        }
        130 => Some(PointerAction::Release),
        _ => None,
    }
}

/// Synthetic tilt readings: slow sine sweeps on both axes.
///
/// `t` is elapsed time in seconds. Returns `(beta, gamma)` in degrees,
/// small enough that the reading never hits the offset clamp.
#[must_use]
pub fn tilt_sweep(t: f64) -> (f64, f64) {
    let beta = 8.0 * libm::sin(t * 0.9);
    let gamma = 5.0 * libm::sin(t * 0.6);
    (beta, gamma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assets_and_layers_line_up() {
        assert_eq!(LAYER_ASSETS.len(), MONSTER_LAYERS.len());
        for (i, layer) in MONSTER_LAYERS.iter().enumerate() {
            assert_eq!(layer.image, ImageId(u32::try_from(i).unwrap()));
        }
    }

    #[test]
    fn monster_scene_matches_the_artwork() {
        let scene = monster_scene();
        assert_eq!(scene.len(), 10);
        // The stripe is translucent; the shadow multiplies.
        assert_eq!(scene.layers()[2].opacity, 0.6);
        assert_eq!(scene.layers()[3].blend, BlendMode::Multiply);
        assert_eq!(scene.layers()[3].opacity, 0.75);
        // The mask is pinned at the focal plane.
        assert_eq!(scene.layers()[8].depth, 0.0);
    }

    #[test]
    fn script_hits_its_marks() {
        assert_eq!(
            pointer_script(30),
            Some(PointerAction::Press { x: 100.0, y: 100.0 })
        );
        assert_eq!(
            pointer_script(60),
            Some(PointerAction::Drag { x: 80.0, y: 130.0 })
        );
        assert_eq!(pointer_script(90), Some(PointerAction::Release));
        assert_eq!(pointer_script(95), None);
        assert_eq!(
            pointer_script(100),
            Some(PointerAction::Press { x: 50.0, y: 50.0 })
        );
        assert_eq!(pointer_script(130), Some(PointerAction::Release));
        assert_eq!(pointer_script(131), None);
    }
}
