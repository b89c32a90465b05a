// SPDX-License-Identifier: MPL-2.0
//! `clip_lens` is a pointer-scrubbed film clip viewer engine built for the
//! Iced GUI framework.
//!
//! Hovering a paused clip and moving the pointer scrubs through its
//! timeline: accumulated pointer movement maps onto the clip's duration,
//! in any direction. The crate provides the playback controller behind
//! that interaction, album loading from flat JSON content files,
//! media-URL resolution, an Iced component binding, and a demo
//! application driven by a wall-clock media backend.

#![doc(html_root_url = "https://docs.rs/clip_lens/0.2.0")]

pub mod album;
pub mod app;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod media;
pub mod test_utils;
pub mod ui;
