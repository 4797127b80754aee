// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for lenticular.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source
//! - [`CanvasCompositor`]: 2D-canvas presenter for composed frames
//! - [`InputBridge`]: pointer and device-orientation event wiring
//! - [`ImageLoader`]: asset preloading gated on a ready latch

#![no_std]

extern crate alloc;

mod canvas;
mod events;
mod loader;
mod raf;

pub use canvas::CanvasCompositor;
pub use events::{InputBridge, orientation_from_angle};
pub use lenticular_core::compose::Compositor;
pub use loader::ImageLoader;
pub use raf::RafLoop;

use lenticular_core::time::{HostTime, Timebase};

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks. Use [`timebase`] to
/// convert to nanoseconds.
#[must_use]
pub fn now() -> HostTime {
    let ms = raf::performance_now();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns small positive f64; µs fits in u64"
    )]
    let us = (ms * 1000.0) as u64;
    HostTime(us)
}

/// Returns the web [`Timebase`]: 1 tick = 1 µs = 1000 ns.
///
/// `Timebase { numer: 1000, denom: 1 }` means `nanoseconds = ticks × 1000`.
#[must_use]
pub fn timebase() -> Timebase {
    Timebase::MICROS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timebase_is_microsecond() {
        let tb = timebase();
        // 1 tick = 1 µs = 1000 ns
        assert_eq!(tb.ticks_to_nanos(1), 1000);
        assert_eq!(tb.ticks_to_nanos(1_000_000), 1_000_000_000);
    }
}
