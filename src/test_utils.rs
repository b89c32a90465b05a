// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and playback test fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float
//! comparison, which properly handle floating-point precision issues that
//! `assert_eq!` cannot, plus small helpers shared between unit and
//! integration tests.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

use crate::media::MediaCommand;
use tokio::sync::mpsc::UnboundedReceiver;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Default epsilon for f64 comparisons.
pub const F64_EPSILON: f64 = 1e-10;

/// Drains every command currently queued on a media channel.
///
/// Tests use this both to assert on issued commands and to discard
/// setup noise (e.g. the seek-to-zero a clip sends when it becomes
/// ready).
pub fn drain_commands(rx: &mut UnboundedReceiver<MediaCommand>) -> Vec<MediaCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}
