// Copyright 2026 the Lenticular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON-lines export for lenticular diagnostics.
//!
//! This crate provides [`TraceSink`](lenticular_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`json::JsonLinesSink`] — one JSON object per event, for `jq` and
//!   friends.

pub mod json;
pub mod pretty;
