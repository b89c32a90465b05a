// SPDX-License-Identifier: MPL-2.0
//! Media seam between the playback controller and media backends.
//!
//! The controller never talks to a decoder or a rendering surface
//! directly. It sends fire-and-forget [`MediaCommand`]s through a
//! [`MediaCommandSender`] and consumes [`MediaEvent`] lifecycle
//! notifications the host forwards back in. Any backend that speaks this
//! seam can sit behind the controller; [`ClockMedia`] is the built-in
//! wall-clock backend used by the demo binary and the tests.

pub mod clock;
pub mod handle;
pub mod source;

pub use clock::ClockMedia;
pub use handle::{media_channel, MediaCommand, MediaCommandSender, MediaEvent};
pub use source::MediaSource;
