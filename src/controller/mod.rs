// SPDX-License-Identifier: MPL-2.0
//! Clip playback controller.
//!
//! Converts heterogeneous input (pointer movement, keyboard, surface
//! activation) into media commands (play, pause, seek) and navigation
//! requests, while maintaining a race-free per-clip state machine.
//!
//! The controller is the multi-clip "preloaded" variant: every clip in
//! the album has its own media backend attached up front, and the
//! controller tracks playback state and duration per clip index. Only
//! the active index receives input; switching the active index pauses
//! the previous clip's media and resets the transient scrub state.
//!
//! The controller owns no rendering and performs no I/O. Media commands
//! go out fire-and-forget through [`MediaCommandSender`]s; the
//! asynchronous outcome of a play request returns later as a
//! [`MediaEvent`] which is only applied if the clip it targeted is
//! still the active one.

mod state;

pub mod scrub;

pub use scrub::{ScrubState, ScrubTravel};
pub use state::ClipPlaybackState;

use crate::diagnostics::{DiagnosticsHandle, UserAction};
use crate::media::{MediaCommand, MediaCommandSender, MediaEvent};

/// Navigation requests the controller hands back to its host.
///
/// The host owns the clip list: it performs the index change and then
/// calls [`ClipController::activate`] with the new index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Advance to the next clip.
    RequestNext,
    /// Go back to the previous clip.
    RequestPrevious,
}

/// Keys the controller arbitrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    ArrowLeft,
    ArrowRight,
    Space,
}

/// Outcome of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyResponse {
    /// Whether the host must stop the event from propagating further
    /// (Space would otherwise scroll the page).
    pub captured: bool,
    /// Navigation request produced by the key, if any.
    pub event: Option<Event>,
}

/// Per-clip bookkeeping.
#[derive(Debug, Default)]
struct ClipSlot {
    state: ClipPlaybackState,
    duration_secs: Option<f64>,
    has_first_frame: bool,
    media: Option<MediaCommandSender>,
    /// A play request is in flight for this slot. Results arriving after
    /// the active index moved on are dropped by this guard.
    play_pending: bool,
}

impl ClipSlot {
    fn send(&self, command: MediaCommand) {
        if let Some(sender) = &self.media {
            let _ = sender.send(command);
        }
    }

    fn pause_if_playing(&mut self) {
        if self.state.is_playing() {
            self.send(MediaCommand::Pause);
            self.state = ClipPlaybackState::Paused;
        }
        self.play_pending = false;
    }

    /// Leaves `Loading` once both metadata and first-frame data arrived.
    fn try_become_ready(&mut self) {
        if self.state.is_loading() && self.duration_secs.is_some() && self.has_first_frame {
            self.send(MediaCommand::Seek { target_secs: 0.0 });
            self.state = ClipPlaybackState::Paused;
        }
    }
}

/// Multi-clip playback controller with pointer scrubbing.
#[derive(Debug)]
pub struct ClipController {
    slots: Vec<ClipSlot>,
    active: usize,
    scrub: ScrubState,
    travel: ScrubTravel,
    /// Touch hosts disable the scrubbing subsystem entirely and rely on
    /// tap-to-toggle plus the explicit prev/next controls.
    touch_mode: bool,
    diagnostics: DiagnosticsHandle,
}

impl ClipController {
    /// Creates a controller for `clip_count` clips, starting on index 0.
    ///
    /// Every clip begins in [`ClipPlaybackState::Loading`] until its
    /// media backend reports metadata and first-frame data.
    #[must_use]
    pub fn new(clip_count: usize, travel: ScrubTravel) -> Self {
        Self {
            slots: (0..clip_count).map(|_| ClipSlot::default()).collect(),
            active: 0,
            scrub: ScrubState::default(),
            travel,
            touch_mode: false,
            diagnostics: DiagnosticsHandle::disabled(),
        }
    }

    /// Attaches a diagnostics handle. The default is a no-op handle.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsHandle) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Connects the media backend for one clip index.
    ///
    /// Out-of-range indices are ignored.
    pub fn attach_media(&mut self, index: usize, sender: MediaCommandSender) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.media = Some(sender);
        }
    }

    /// Enables or disables touch mode. Enabling it disengages any
    /// scrub in progress.
    pub fn set_touch_mode(&mut self, touch_mode: bool) {
        self.touch_mode = touch_mode;
        if touch_mode {
            self.scrub.leave();
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the number of clips under control.
    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the active clip index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Returns the playback state of the active clip.
    #[must_use]
    pub fn state(&self) -> &ClipPlaybackState {
        static EMPTY: ClipPlaybackState = ClipPlaybackState::Loading;
        self.slots.get(self.active).map_or(&EMPTY, |s| &s.state)
    }

    /// Returns the playback state of an arbitrary clip index.
    #[must_use]
    pub fn state_of(&self, index: usize) -> Option<&ClipPlaybackState> {
        self.slots.get(index).map(|s| &s.state)
    }

    /// Returns the active clip's duration, once metadata has loaded.
    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.slots.get(self.active).and_then(|s| s.duration_secs)
    }

    /// Returns true while a pointer scrub is engaged.
    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.scrub.is_active()
    }

    /// Returns the accumulated pointer movement of the current scrub.
    #[must_use]
    pub fn scrub_accumulated(&self) -> f32 {
        self.scrub.accumulated()
    }

    /// Returns true if the active clip is the first.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.active == 0
    }

    /// Returns true if the active clip is the last.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.slots.is_empty() || self.active + 1 == self.slots.len()
    }

    // =========================================================================
    // Clip switching
    // =========================================================================

    /// Makes `index` the active clip.
    ///
    /// Pauses the previously active clip's media if it was playing,
    /// clears its in-flight play request, then resets the transient
    /// state for the new index: the scrub accumulator is discarded and a
    /// ready clip is rewound to position 0 and paused. A failed clip
    /// stays failed. Out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) {
        if index >= self.slots.len() || index == self.active {
            return;
        }

        if let Some(previous) = self.slots.get_mut(self.active) {
            previous.pause_if_playing();
        }

        self.active = index;
        self.scrub.leave();

        let slot = &mut self.slots[index];
        slot.play_pending = false;
        match slot.state {
            ClipPlaybackState::Failed { .. } => {}
            _ if slot.duration_secs.is_some() && slot.has_first_frame => {
                slot.send(MediaCommand::Seek { target_secs: 0.0 });
                slot.state = ClipPlaybackState::Paused;
            }
            _ => slot.state = ClipPlaybackState::Loading,
        }
    }

    // =========================================================================
    // Media lifecycle
    // =========================================================================

    /// Applies a media backend event for the given clip index.
    ///
    /// Play results are guarded: a `PlayAccepted` only transitions a
    /// clip to `Playing` if that clip still has the request in flight
    /// *and* is still the active clip. Anything arriving for a stale
    /// index clears the pending flag and is otherwise dropped.
    pub fn media_event(&mut self, index: usize, event: MediaEvent) {
        let is_active = index == self.active;
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };

        match event {
            MediaEvent::MetadataLoaded { duration_secs } => {
                slot.duration_secs = Some(duration_secs);
                slot.try_become_ready();
            }
            MediaEvent::FirstFrameReady => {
                slot.has_first_frame = true;
                slot.try_become_ready();
            }
            MediaEvent::PlayAccepted => {
                let pending = std::mem::take(&mut slot.play_pending);
                if pending && is_active {
                    slot.state = ClipPlaybackState::Playing;
                }
            }
            MediaEvent::PlayRejected { reason } => {
                slot.play_pending = false;
                // Recoverable: stay paused, let the host offer a retry
                // through an explicit gesture.
                if is_active {
                    self.diagnostics
                        .log_error_simple(format!("play rejected: {reason}"));
                }
            }
            MediaEvent::LoadFailed { reason } => {
                slot.play_pending = false;
                slot.state = ClipPlaybackState::Failed {
                    reason: reason.clone(),
                };
                self.diagnostics
                    .log_error_simple(format!("clip {index} failed to load: {reason}"));
            }
            MediaEvent::Ended => {
                if matches!(
                    slot.state,
                    ClipPlaybackState::Playing | ClipPlaybackState::Paused
                ) {
                    slot.state = ClipPlaybackState::Ended;
                }
                if is_active {
                    self.scrub.leave();
                }
            }
        }
    }

    // =========================================================================
    // Playback control
    // =========================================================================

    /// Toggles play/pause for the active clip.
    ///
    /// From `Ended`, playback restarts from the beginning: seek to 0,
    /// reset the accumulator, then play. While `Loading` or `Failed`
    /// this is a no-op. Play requests are answered asynchronously; the
    /// clip stays paused until `PlayAccepted` arrives.
    pub fn toggle_play(&mut self) {
        let Some(slot) = self.slots.get_mut(self.active) else {
            return;
        };

        match slot.state {
            ClipPlaybackState::Playing => {
                slot.send(MediaCommand::Pause);
                slot.state = ClipPlaybackState::Paused;
                slot.play_pending = false;
            }
            ClipPlaybackState::Ended => {
                slot.send(MediaCommand::Seek { target_secs: 0.0 });
                slot.state = ClipPlaybackState::Paused;
                // Restart from the beginning: accumulator back to zero
                self.scrub.leave();
                slot.play_pending = true;
                slot.send(MediaCommand::Play);
            }
            ClipPlaybackState::Paused => {
                // Playing disables scrubbing; require a fresh pointer
                // entry after the next pause.
                self.scrub.leave();
                slot.play_pending = true;
                slot.send(MediaCommand::Play);
            }
            ClipPlaybackState::Loading | ClipPlaybackState::Failed { .. } => return,
        }

        self.diagnostics.log_action(UserAction::TogglePlayback);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Requests the next clip, pausing the current one first.
    ///
    /// Returns `None` on the last clip (boundary no-op).
    pub fn request_next(&mut self) -> Option<Event> {
        if self.is_at_last() {
            return None;
        }
        if let Some(slot) = self.slots.get_mut(self.active) {
            slot.pause_if_playing();
        }
        self.diagnostics.log_action(UserAction::NavigateNext);
        Some(Event::RequestNext)
    }

    /// Requests the previous clip, pausing the current one first.
    ///
    /// Returns `None` on the first clip (boundary no-op).
    pub fn request_previous(&mut self) -> Option<Event> {
        if self.is_at_first() {
            return None;
        }
        if let Some(slot) = self.slots.get_mut(self.active) {
            slot.pause_if_playing();
        }
        self.diagnostics.log_action(UserAction::NavigatePrevious);
        Some(Event::RequestPrevious)
    }

    /// Activation of the media surface itself (click/tap outside the
    /// play control): advances to the next clip when not on the last.
    ///
    /// Click-target disambiguation is the host's responsibility; the
    /// play control routes to [`Self::toggle_play`] instead.
    pub fn surface_activated(&mut self) -> Option<Event> {
        self.request_next()
    }

    /// Arbitrates a key press.
    ///
    /// ArrowRight/ArrowLeft navigate (no-ops at the boundaries); Space
    /// toggles playback and must always be captured by the host to
    /// prevent page scrolling.
    pub fn key_pressed(&mut self, key: KeyPress) -> KeyResponse {
        match key {
            KeyPress::ArrowRight => KeyResponse {
                captured: false,
                event: self.request_next(),
            },
            KeyPress::ArrowLeft => KeyResponse {
                captured: false,
                event: self.request_previous(),
            },
            KeyPress::Space => {
                self.toggle_play();
                KeyResponse {
                    captured: true,
                    event: None,
                }
            }
        }
    }

    // =========================================================================
    // Pointer scrubbing
    // =========================================================================

    /// Pointer entered the media surface.
    ///
    /// Engages scrubbing only when the active clip is ready and paused.
    /// The accumulator is seeded from `current_media_secs`, the clip's
    /// current playhead as reported by the host, so scrubbing resumes
    /// from wherever the media sits. Ignored in touch mode.
    pub fn pointer_entered(&mut self, position: (f32, f32), current_media_secs: f64) {
        if self.touch_mode {
            return;
        }
        let Some(slot) = self.slots.get(self.active) else {
            return;
        };
        if !slot.state.accepts_scrubbing() {
            return;
        }
        let Some(duration) = slot.duration_secs else {
            return;
        };
        self.scrub
            .enter(position, current_media_secs, duration, self.travel);
    }

    /// Pointer moved over the media surface.
    ///
    /// Accumulates the Euclidean movement magnitude and seeks the media
    /// to the absolute position the total accumulated movement maps to.
    /// Reaching the end pins the playhead at the duration and the clip
    /// becomes `Ended`, exactly as if the media had ended natively.
    /// No-op while playing, loading, ended, in touch mode, or when the
    /// duration is unknown.
    pub fn pointer_moved(&mut self, position: (f32, f32)) {
        if self.touch_mode || !self.scrub.is_active() {
            return;
        }
        let Some(slot) = self.slots.get_mut(self.active) else {
            return;
        };
        if !slot.state.accepts_scrubbing() {
            return;
        }
        let Some(duration) = slot.duration_secs else {
            return;
        };

        let movement = self.scrub.record_movement(position);
        if movement <= 0.0 {
            return;
        }

        let target = self.scrub.target_secs(duration, self.travel);
        if target >= duration {
            slot.send(MediaCommand::Seek {
                target_secs: duration,
            });
            slot.state = ClipPlaybackState::Ended;
            self.diagnostics.log_action(UserAction::ScrubToEnd);
        } else {
            slot.send(MediaCommand::Seek {
                target_secs: target,
            });
        }
    }

    /// Pointer left the media surface. Disengages scrubbing; no other
    /// state changes.
    pub fn pointer_left(&mut self) {
        self.scrub.leave();
    }
}
