// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions worth remembering.
///
/// These represent the interactions that explain what a user was doing
/// when a playback problem occurred.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Navigate to the next clip.
    NavigateNext,

    /// Navigate to the previous clip.
    NavigatePrevious,

    /// Toggle play/pause on the active clip.
    TogglePlayback,

    /// A pointer scrub carried the clip all the way to its end.
    ScrubToEnd,

    /// An album was opened.
    LoadAlbum {
        /// Number of clips in the album.
        clip_count: usize,
    },
}

/// What a diagnostic event records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    /// A user interaction.
    UserAction {
        action: UserAction,
        details: Option<String>,
    },

    /// A recoverable problem (e.g. a rejected play request).
    Warning { message: String },

    /// A failure (e.g. a clip that could not be loaded).
    Error { message: String },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    /// Monotonic capture time.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_action_serializes_with_action_tag() {
        let json = serde_json::to_string(&UserAction::NavigateNext).unwrap();
        assert!(json.contains("navigate_next"));

        let json = serde_json::to_string(&UserAction::LoadAlbum { clip_count: 4 }).unwrap();
        assert!(json.contains("load_album"));
        assert!(json.contains('4'));
    }

    #[test]
    fn events_are_stamped_monotonically() {
        let first = DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action: UserAction::TogglePlayback,
            details: None,
        });
        let second = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: "slow load".to_string(),
        });
        assert!(second.timestamp >= first.timestamp);
    }
}
