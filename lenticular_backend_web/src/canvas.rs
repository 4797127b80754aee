// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas2D execution of frame compositions.
//!
//! [`CanvasCompositor`] resolves each [`DrawCommand`]'s image handle against
//! the decoded images it was built with and replays the command list into a
//! `CanvasRenderingContext2d`. The whole-surface tilt is not drawn into the
//! bitmap; it is applied as a CSS `rotateX`/`rotateY` transform on the
//! canvas element, so the browser's 3D perspective does the work.
//!
//! [`DrawCommand`]: lenticular_core::compose::DrawCommand

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use lenticular_core::compose::{Compositor, FrameComposition, Rgb};
use lenticular_core::offset::SurfaceTilt;
use lenticular_core::scene::BlendMode;

/// Draws [`FrameComposition`]s onto an `HtmlCanvasElement`.
///
/// The image table is fixed at construction: index `i` backs `ImageId(i)`,
/// matching the scene's registration order. Commands whose id has no image
/// are skipped.
pub struct CanvasCompositor {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    images: Vec<HtmlImageElement>,
}

impl core::fmt::Debug for CanvasCompositor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CanvasCompositor")
            .field("canvas", &"HtmlCanvasElement")
            .field("images_len", &self.images.len())
            .finish()
    }
}

impl CanvasCompositor {
    /// Creates a compositor drawing to `canvas` with the given image table.
    ///
    /// # Errors
    ///
    /// Fails if the canvas cannot provide a `2d` context.
    pub fn new(canvas: HtmlCanvasElement, images: Vec<HtmlImageElement>) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .unchecked_into::<CanvasRenderingContext2d>();
        Ok(Self {
            canvas,
            context,
            images,
        })
    }

    /// Returns a reference to the canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Compositor for CanvasCompositor {
    fn present(&mut self, frame: &FrameComposition) {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());

        // 1. Whole-surface tilt on the element, not the bitmap.
        let _ = self
            .canvas
            .style()
            .set_property("transform", &css_tilt(frame.tilt));

        // 2. Clear, then an opaque background fill.
        self.context.clear_rect(0.0, 0.0, width, height);
        let _ = self.context.set_global_composite_operation("source-over");
        self.context.set_global_alpha(1.0);
        self.context.set_fill_style_str(&css_rgb(frame.background));
        self.context.fill_rect(0.0, 0.0, width, height);

        // 3. Replay the draw list back-to-front.
        for command in &frame.commands {
            let Some(image) = self.images.get(command.image.0 as usize) else {
                continue;
            };
            let _ = self
                .context
                .set_global_composite_operation(composite_op(command.blend));
            self.context.set_global_alpha(f64::from(command.opacity));
            let _ = self.context.draw_image_with_html_image_element(
                image,
                command.offset.x,
                command.offset.y,
            );
        }
    }
}

/// Maps a [`BlendMode`] to its canvas `globalCompositeOperation` keyword.
#[must_use]
pub fn composite_op(blend: BlendMode) -> &'static str {
    match blend {
        BlendMode::SourceOver => "source-over",
        BlendMode::Multiply => "multiply",
        BlendMode::Screen => "screen",
    }
}

/// Formats a color as a CSS `rgb()` value.
fn css_rgb(color: Rgb) -> String {
    format!("rgb({},{},{})", color.r, color.g, color.b)
}

/// Formats a tilt as a CSS rotation transform.
fn css_tilt(tilt: SurfaceTilt) -> String {
    format!("rotateX({}deg) rotateY({}deg)", tilt.rotate_x, tilt.rotate_y)
}
