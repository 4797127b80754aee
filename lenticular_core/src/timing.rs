// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame ticks delivered by the refresh-synced frame loop.

use crate::time::HostTime;

/// A single display-refresh opportunity.
///
/// The backend delivers one `FrameTick` per display refresh (from
/// `requestAnimationFrame` on the web, or a synthetic fixed-interval loop in
/// the native demos) and the stage composes exactly one frame per tick.
/// Ticks are never produced by a free-running timer; when the host stops
/// scheduling refreshes, composition stops with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTick {
    /// The timestamp for this tick, in host ticks.
    ///
    /// Animations sample against this value, never against a wall clock read
    /// mid-frame, so a frame is internally consistent.
    pub now: HostTime,
    /// Monotonically increasing frame counter, starting at 0.
    pub frame_index: u64,
    /// Nominal refresh interval in nanoseconds, if the host knows it.
    ///
    /// `requestAnimationFrame` does not report one; the synthetic loops do.
    pub refresh_interval: Option<u64>,
}
