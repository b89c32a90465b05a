// SPDX-License-Identifier: MPL-2.0
//! Per-clip playback state machine.
//!
//! Every clip moves through a small set of states:
//! - `Loading`: initial state whenever a clip becomes current; playback
//!   and scrub input are no-ops until the media backend has reported
//!   both metadata and first-frame data.
//! - `Paused`: default after load, playhead wherever it was last put.
//! - `Playing`: media advancing on its own; scrubbing is disabled.
//! - `Ended`: the end was reached, natively or by scrubbing all the way
//!   through. Equivalent to `Paused` for UI purposes, but scrubbing
//!   stays disabled until playback is explicitly restarted.
//! - `Failed`: the media could not be loaded. Persistent; no retry.

/// Playback state of a single clip.
///
/// Type-safe state transitions live in the controller; this enum only
/// answers questions about the current state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClipPlaybackState {
    /// Waiting for the media backend to report metadata and first frame.
    #[default]
    Loading,

    /// Ready and paused.
    Paused,

    /// Ready and playing.
    Playing,

    /// Ready, playhead pinned at the end of the clip.
    Ended,

    /// Media failed to load or decode. Contains the backend's reason.
    Failed { reason: String },
}

impl ClipPlaybackState {
    /// Returns true once loading has completed successfully.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Paused | Self::Playing | Self::Ended)
    }

    /// Returns true if the clip is currently playing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the clip is paused (not ended, not failed).
    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if the playhead is pinned at the end.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Returns true while the clip is still loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if the media failed to load.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns the failure reason, if in the failed state.
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// Returns true if pointer scrubbing may engage in this state.
    ///
    /// Scrubbing requires a ready, paused clip. `Ended` deliberately
    /// does not qualify: once a clip has run out, only an explicit
    /// restart re-enables interaction with the timeline.
    #[must_use]
    pub fn accepts_scrubbing(&self) -> bool {
        matches!(self, Self::Paused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_loading() {
        assert_eq!(ClipPlaybackState::default(), ClipPlaybackState::Loading);
    }

    #[test]
    fn readiness_covers_paused_playing_and_ended() {
        assert!(ClipPlaybackState::Paused.is_ready());
        assert!(ClipPlaybackState::Playing.is_ready());
        assert!(ClipPlaybackState::Ended.is_ready());
        assert!(!ClipPlaybackState::Loading.is_ready());
        assert!(!ClipPlaybackState::Failed { reason: "x".into() }.is_ready());
    }

    #[test]
    fn only_paused_accepts_scrubbing() {
        assert!(ClipPlaybackState::Paused.accepts_scrubbing());
        assert!(!ClipPlaybackState::Playing.accepts_scrubbing());
        assert!(!ClipPlaybackState::Ended.accepts_scrubbing());
        assert!(!ClipPlaybackState::Loading.accepts_scrubbing());
        assert!(!ClipPlaybackState::Failed { reason: "x".into() }.accepts_scrubbing());
    }

    #[test]
    fn failure_reason_is_exposed() {
        let state = ClipPlaybackState::Failed {
            reason: "decode error".to_string(),
        };
        assert_eq!(state.failure_reason(), Some("decode error"));
        assert_eq!(ClipPlaybackState::Paused.failure_reason(), None);
    }
}
