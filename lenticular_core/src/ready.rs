// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The startup gate: composition begins only once every asset is in.
//!
//! Drawing a scene with some images still decoding would flash partial
//! artwork, so the frame loop is started from a [`ReadyLatch`] that counts
//! asset completions down. There is no timeout and no partial render: if an
//! asset never completes, the scene never starts.

/// Counts asset completions and fires exactly once when all have landed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReadyLatch {
    expected: u32,
    completed: u32,
}

impl ReadyLatch {
    /// Creates a latch waiting on `expected` completions.
    ///
    /// A latch armed with zero is ready from the start (an empty scene has
    /// nothing to wait for), but then no completion may ever be reported.
    #[inline]
    #[must_use]
    pub const fn new(expected: u32) -> Self {
        Self {
            expected,
            completed: 0,
        }
    }

    /// Records one asset completion.
    ///
    /// Returns `true` exactly once: on the call that completes the count.
    /// Completion order does not matter, only the count.
    ///
    /// # Panics
    ///
    /// Panics if called after the latch is already ready; a completion the
    /// latch was not armed for means the caller wired the wrong asset set.
    pub fn complete_one(&mut self) -> bool {
        assert!(
            self.completed < self.expected,
            "more asset completions than the latch was armed for"
        );
        self.completed += 1;
        self.completed == self.expected
    }

    /// Whether every expected completion has been recorded.
    #[inline]
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.completed == self.expected
    }

    /// Number of completions still outstanding.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.expected - self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_on_the_final_completion() {
        let mut latch = ReadyLatch::new(3);
        assert!(!latch.is_ready());
        assert!(!latch.complete_one());
        assert!(!latch.complete_one());
        assert_eq!(latch.remaining(), 1);
        assert!(latch.complete_one(), "third of three must fire");
        assert!(latch.is_ready());
        assert_eq!(latch.remaining(), 0);
    }

    #[test]
    fn zero_armed_latch_is_ready_immediately() {
        let latch = ReadyLatch::new(0);
        assert!(latch.is_ready());
        assert_eq!(latch.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "more asset completions than the latch was armed for")]
    fn extra_completion_is_rejected() {
        let mut latch = ReadyLatch::new(1);
        assert!(latch.complete_one());
        let _ = latch.complete_one();
    }
}
