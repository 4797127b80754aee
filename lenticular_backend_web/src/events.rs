// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM event wiring for pointer and device-orientation input.
//!
//! [`InputBridge`] subscribes a [`Stage`] to the browser's input streams:
//!
//! - presses (`mousedown`/`touchstart`) on the artwork canvas only, so a
//!   drag must start on the artwork;
//! - moves and releases on the window, so a drag that leaves the canvas
//!   keeps tracking until the finger or button comes up;
//! - `deviceorientation` and `orientationchange` on the window.
//!
//! Move listeners are registered non-passive and call `preventDefault`, on
//! both the canvas and the window, which keeps touch drags from scrolling
//! the page while the bridge is wired. Dropping the bridge removes every
//! listener.
//!
//! Malformed events are dropped here, before they reach the stage: a touch
//! event with an empty touch list, or an orientation reading with a missing
//! angle, results in no call at all.
//!
//! [`Stage`]: lenticular_core::stage::Stage

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{
    AddEventListenerOptions, DeviceOrientationEvent, Event, EventTarget, HtmlCanvasElement,
    MouseEvent, TouchEvent, Window,
};

use lenticular_core::input::Orientation;
use lenticular_core::stage::Stage;

/// One registered DOM listener, kept alive until removal.
struct Listener {
    target: EventTarget,
    name: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Wires a shared [`Stage`] to the browser's input events.
///
/// The bridge owns its listeners; dropping it unsubscribes from every
/// event it registered.
pub struct InputBridge {
    listeners: Vec<Listener>,
}

impl core::fmt::Debug for InputBridge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InputBridge")
            .field("listeners_len", &self.listeners.len())
            .finish()
    }
}

impl InputBridge {
    /// Attaches input listeners for `stage` to `canvas` and the window.
    ///
    /// # Errors
    ///
    /// Fails if there is no global window or a listener cannot be
    /// registered.
    pub fn attach(canvas: &HtmlCanvasElement, stage: Rc<RefCell<Stage>>) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let canvas_target: &EventTarget = canvas.as_ref();
        let window_target: &EventTarget = window.as_ref();
        let mut listeners = Vec::new();

        // Presses anchor on the artwork only.
        for name in ["mousedown", "touchstart"] {
            let stage = Rc::clone(&stage);
            listeners.push(listen(canvas_target, name, move |event| {
                if let Some((x, y)) = pointer_position(&event) {
                    stage.borrow_mut().pointer_pressed(x, y);
                }
            })?);
        }

        // Moves track on the window so drags survive leaving the canvas.
        for name in ["mousemove", "touchmove"] {
            let stage = Rc::clone(&stage);
            listeners.push(listen_active(window_target, name, move |event| {
                event.prevent_default();
                if let Some((x, y)) = pointer_position(&event) {
                    stage.borrow_mut().pointer_moved(x, y);
                }
            })?);
            // Scroll suppression on the canvas itself; state is already
            // updated by the window listener.
            listeners.push(listen_active(canvas_target, name, move |event| {
                event.prevent_default();
            })?);
        }

        // Releases anywhere end the drag.
        for name in ["mouseup", "touchend"] {
            let stage = Rc::clone(&stage);
            listeners.push(listen(window_target, name, move |_event| {
                stage.borrow_mut().pointer_released(crate::now());
            })?);
        }

        // Tilt readings, remapped through the current orientation class.
        {
            let stage = Rc::clone(&stage);
            let window = window.clone();
            listeners.push(listen(window_target, "deviceorientation", move |event| {
                let Some(orientation_event) = event.dyn_ref::<DeviceOrientationEvent>() else {
                    return;
                };
                let (Some(beta), Some(gamma)) =
                    (orientation_event.beta(), orientation_event.gamma())
                else {
                    return;
                };
                let orientation = current_orientation(&window);
                stage.borrow_mut().motion_updated(beta, gamma, orientation);
            })?);
        }

        // Rotating the device rebases the tilt's rest pose.
        {
            let stage = Rc::clone(&stage);
            listeners.push(listen(window_target, "orientationchange", move |_event| {
                stage.borrow_mut().orientation_changed();
            })?);
        }

        Ok(Self { listeners })
    }
}

impl Drop for InputBridge {
    fn drop(&mut self) {
        for listener in &self.listeners {
            let _ = listener
                .target
                .remove_event_listener_with_callback(
                    listener.name,
                    listener.closure.as_ref().unchecked_ref(),
                );
        }
    }
}

/// Registers a listener with default options.
fn listen(
    target: &EventTarget,
    name: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<Listener, JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    Ok(Listener {
        target: target.clone(),
        name,
        closure,
    })
}

/// Registers a non-passive listener, so the handler may `preventDefault`.
fn listen_active(
    target: &EventTarget,
    name: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<Listener, JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        name,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    Ok(Listener {
        target: target.clone(),
        name,
        closure,
    })
}

/// Extracts viewport coordinates from a mouse or touch event.
///
/// Touch events read the first active touch; an empty touch list yields
/// `None` and the event is ignored.
fn pointer_position(event: &Event) -> Option<(f64, f64)> {
    if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        let touch = touch_event.touches().get(0)?;
        return Some((f64::from(touch.client_x()), f64::from(touch.client_y())));
    }
    let mouse_event = event.dyn_ref::<MouseEvent>()?;
    Some((
        f64::from(mouse_event.client_x()),
        f64::from(mouse_event.client_y()),
    ))
}

/// Reads the current orientation class from `screen.orientation`.
///
/// Hosts that expose no orientation API fall into the unclassified case,
/// matching how unknown angles are treated.
fn current_orientation(window: &Window) -> Orientation {
    window
        .screen()
        .ok()
        .and_then(|screen| screen.orientation().angle().ok())
        .map_or(Orientation::Flipped, orientation_from_angle)
}

/// Maps a `screen.orientation.angle` value to an [`Orientation`] class.
///
/// The angle is the counterclockwise rotation of the screen from its
/// natural position, so 270° is the class a legacy `window.orientation` of
/// −90° described. Angles outside the four compass values are treated as
/// unclassified.
#[must_use]
pub fn orientation_from_angle(angle: u16) -> Orientation {
    match angle {
        0 => Orientation::Portrait,
        90 => Orientation::LandscapeLeft,
        270 => Orientation::LandscapeRight,
        _ => Orientation::Flipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_angles_map_to_their_classes() {
        assert_eq!(orientation_from_angle(0), Orientation::Portrait);
        assert_eq!(orientation_from_angle(90), Orientation::LandscapeLeft);
        assert_eq!(orientation_from_angle(270), Orientation::LandscapeRight);
        assert_eq!(orientation_from_angle(180), Orientation::Flipped);
    }

    #[test]
    fn unknown_angles_fall_back_to_unclassified() {
        assert_eq!(orientation_from_angle(45), Orientation::Flipped);
        assert_eq!(orientation_from_angle(359), Orientation::Flipped);
    }
}
