// SPDX-License-Identifier: MPL-2.0
//! Command and event types for driving a media backend.

use tokio::sync::mpsc;

/// Commands sent from the playback controller to a media backend.
///
/// Commands are fire-and-forget: the controller never waits for a
/// result. The asynchronous outcome of a play request comes back later
/// as [`MediaEvent::PlayAccepted`] or [`MediaEvent::PlayRejected`].
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    /// Begin or resume playback from the current position.
    Play,

    /// Pause playback at the current position.
    Pause,

    /// Seek to an absolute position in seconds.
    Seek { target_secs: f64 },
}

/// Lifecycle notifications a media backend reports to its host.
///
/// The host forwards these into the controller, tagged with the clip
/// index they belong to.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Duration (and other metadata) became known.
    MetadataLoaded { duration_secs: f64 },

    /// First displayable frame is available. Backends without real
    /// frames report this immediately after metadata.
    FirstFrameReady,

    /// An earlier play request was accepted and playback started.
    PlayAccepted,

    /// An earlier play request was rejected (autoplay policy, decode
    /// failure). The clip stays paused; no automatic retry.
    PlayRejected { reason: String },

    /// The media failed to load or decode. Persistent; the clip is
    /// presented as failed and never retried automatically.
    LoadFailed { reason: String },

    /// Playback reached the natural end of the media.
    Ended,
}

/// Handle for sending commands to a media backend.
///
/// Cheap to clone. Sends never block; if the backend is gone the command
/// is dropped, which is fine because a disconnected backend has nothing
/// left to control.
#[derive(Clone)]
pub struct MediaCommandSender {
    tx: mpsc::UnboundedSender<MediaCommand>,
}

impl MediaCommandSender {
    /// Sends a command to the media backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend receiver has been dropped.
    pub fn send(&self, command: MediaCommand) -> Result<(), String> {
        self.tx
            .send(command)
            .map_err(|_| "Media backend not running".to_string())
    }
}

impl std::fmt::Debug for MediaCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaCommandSender")
            .field("connected", &!self.tx.is_closed())
            .finish()
    }
}

/// Creates a connected command channel for one media backend.
///
/// The sender goes to the controller (via `attach_media`); the receiver
/// is drained by whatever owns the backend.
#[must_use]
pub fn media_channel() -> (MediaCommandSender, mpsc::UnboundedReceiver<MediaCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (MediaCommandSender { tx }, rx)
}
