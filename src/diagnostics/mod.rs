// SPDX-License-Identifier: MPL-2.0
//! Activity diagnostics for the clip viewer.
//!
//! Captures meaningful user interactions and playback problems in a
//! memory-bounded ring buffer so a host application can inspect what
//! happened without attaching a debugger. The playback controller takes
//! a [`DiagnosticsHandle`]; the default handle is disabled and every
//! log call on it is a cheap no-op, so diagnostics never become a
//! dependency of playback behavior.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: what happened and when
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: bounded channel
//!   between producers (UI thread) and the stored buffer; sends never
//!   block and are dropped when the channel is full.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction};
