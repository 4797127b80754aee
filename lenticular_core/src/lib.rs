// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core input tracking and frame composition for layered parallax artwork.
//!
//! `lenticular_core` turns pointer drags and device tilt into per-layer
//! displacements for a stack of illustration layers, producing one draw
//! list per display tick. It is `no_std` compatible (with `alloc`) and has
//! no platform dependencies; backend crates own the event sources and the
//! drawing surface.
//!
//! # Architecture
//!
//! The crate is organized around an interaction loop that folds input events
//! into two persistent offsets and re-derives every layer's placement from
//! them each frame:
//!
//! ```text
//!   Backend (events)                    Backend (tick source)
//!       │ press / move / release            │
//!       │ tilt / orientation                ▼
//!       ▼                               FrameTick
//!   Stage ──► InputTracker ◄── GestureMachine (return tween)
//!                  │
//!                  ▼
//!   Stage::frame() ──► FrameComposition ──► Compositor::present()
//! ```
//!
//! **[`scene`]** — The immutable layer registry: image handles, depth
//! factors, and blend state, stored back-to-front.
//!
//! **[`input`]** — Pointer and tilt tracking. Raw events become a pointer
//! offset (drag displacement from its origin) and a motion offset (tilt
//! deltas remapped through the device's orientation class and clamped).
//!
//! **[`gesture`]** — Total press/drag/release state machine plus the
//! springy return-to-center animation that runs after a release.
//!
//! **[`tween`]** — Host-time-driven interpolation with the overshooting
//! easing curve the return animation uses.
//!
//! **[`offset`]** — The pure math: per-layer displacement linear in depth
//! and input, and the whole-surface tilt angles.
//!
//! **[`compose`]** — [`FrameComposition`](compose::FrameComposition), the
//! per-tick draw list, and the [`Compositor`](compose::Compositor) trait
//! platform backends implement.
//!
//! **[`stage`]** — The orchestrator owning all of the above.
//!
//! **[`ready`]** — The startup latch that holds composition until every
//! image asset has loaded.
//!
//! **[`time`]** / **[`timing`]** — Monotonic host time, timebase
//! conversion, and the per-refresh [`FrameTick`](timing::FrameTick).
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for interaction-loop instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod compose;
pub mod gesture;
pub mod input;
pub mod offset;
pub mod ready;
pub mod scene;
pub mod stage;
pub mod time;
pub mod timing;
pub mod trace;
pub mod tween;
