// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive parallax illustration on a 2D canvas.
//!
//! Ten hand-drawn layers slide against each other as you drag the artwork
//! or tilt your phone, and spring back to center when you let go. The page
//! is built from Rust: a perspective container plus the canvas. The layer
//! images are fetched from `img/` relative to the served page.
//!
//! Build with: `wasm-pack build --target web demos/web_parallax`
//!
//! Then serve `demos/web_parallax/` (with the `img/` assets alongside) and
//! open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlImageElement};

use lenticular_backend_web::{CanvasCompositor, Compositor as _, ImageLoader, InputBridge, RafLoop};
use lenticular_core::offset::Tuning;
use lenticular_core::stage::Stage;

use parallax_common::{LAYER_ASSETS, monster_scene};

const CANVAS_W: u32 = 800;
const CANVAS_H: u32 = 800;

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");

    let container = create_container(&document)?;
    document.body().expect("no body").append_child(&container)?;

    let canvas = create_canvas(&document)?;
    container.append_child(&canvas)?;

    let stage = Rc::new(RefCell::new(Stage::new(
        monster_scene(),
        Tuning::default(),
        lenticular_backend_web::timebase(),
    )));

    // Input is live immediately; drawing waits for the assets.
    let bridge = InputBridge::attach(&canvas, Rc::clone(&stage))?;
    core::mem::forget(bridge);

    let loader = ImageLoader::start(&LAYER_ASSETS, move |images| {
        start_presenting(canvas, &stage, images);
    })?;
    core::mem::forget(loader);

    Ok(())
}

/// Builds the compositor once every asset is in and starts the frame loop.
fn start_presenting(
    canvas: HtmlCanvasElement,
    stage: &Rc<RefCell<Stage>>,
    images: &[HtmlImageElement],
) {
    let mut compositor =
        CanvasCompositor::new(canvas, images.to_vec()).expect("no 2d canvas context");

    let stage = Rc::clone(stage);
    let raf = RafLoop::new(move |tick| {
        let mut stage = stage.borrow_mut();
        compositor.present(stage.frame(&tick));
    });
    raf.start();

    // Keep the `RafLoop` alive.
    core::mem::forget(raf);
}

fn create_container(doc: &Document) -> Result<web_sys::HtmlElement, JsValue> {
    let el: web_sys::HtmlElement = doc.create_element("div")?.unchecked_into();
    let s = el.style();
    s.set_property("display", "flex")?;
    s.set_property("justify-content", "center")?;
    s.set_property("align-items", "center")?;
    s.set_property("min-height", "100vh")?;
    s.set_property("background", "#202020")?;
    // Without a perspective depth the rotateX/rotateY tilt flattens out.
    s.set_property("perspective", "1000px")?;
    Ok(el)
}

fn create_canvas(doc: &Document) -> Result<HtmlCanvasElement, JsValue> {
    let el: HtmlCanvasElement = doc.create_element("canvas")?.unchecked_into();
    el.set_width(CANVAS_W);
    el.set_height(CANVAS_H);
    let s = el.style();
    s.set_property("max-width", "95vmin")?;
    s.set_property("max-height", "95vmin")?;
    Ok(el)
}
