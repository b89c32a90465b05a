// SPDX-License-Identifier: MPL-2.0
//! Wall-clock media backend.
//!
//! `ClockMedia` advances a playhead in real time instead of decoding
//! frames. The demo binary and the integration tests use it as a media
//! backend behind the normal command/event seam: positions, durations,
//! seeks, and end-of-clip detection all behave like a real player, only
//! without pixels.

use super::handle::{MediaCommand, MediaEvent};
use std::time::Instant;

/// A media playhead driven by the wall clock.
#[derive(Debug, Clone)]
pub struct ClockMedia {
    /// Clip length in seconds.
    duration_secs: f64,

    /// Playhead position at the last state change.
    base_position_secs: f64,

    /// When playback started, if currently playing.
    started_at: Option<Instant>,

    /// Whether metadata has been announced yet.
    announced: bool,
}

impl ClockMedia {
    /// Creates a stopped playhead for a clip of the given length.
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration_secs: duration_secs.max(0.0),
            base_position_secs: 0.0,
            started_at: None,
            announced: false,
        }
    }

    /// Returns the clip duration in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Returns the current playhead position in seconds.
    #[must_use]
    pub fn position_secs(&self) -> f64 {
        match self.started_at {
            Some(started) => {
                (self.base_position_secs + started.elapsed().as_secs_f64()).min(self.duration_secs)
            }
            None => self.base_position_secs,
        }
    }

    /// Returns true while the playhead is advancing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    /// Applies a controller command, returning the resulting events.
    ///
    /// Play requests always succeed on this backend, so a `Play` yields
    /// `PlayAccepted` immediately.
    pub fn apply(&mut self, command: MediaCommand) -> Vec<MediaEvent> {
        match command {
            MediaCommand::Play => {
                if self.started_at.is_none() {
                    self.started_at = Some(Instant::now());
                }
                vec![MediaEvent::PlayAccepted]
            }
            MediaCommand::Pause => {
                self.freeze();
                Vec::new()
            }
            MediaCommand::Seek { target_secs } => {
                let was_playing = self.started_at.is_some();
                self.freeze();
                self.base_position_secs = target_secs.clamp(0.0, self.duration_secs);
                if was_playing {
                    self.started_at = Some(Instant::now());
                }
                Vec::new()
            }
        }
    }

    /// Polls the playhead, emitting lifecycle events.
    ///
    /// The first poll announces metadata and the first frame. While
    /// playing, reaching the clip length stops the playhead and emits
    /// `Ended`. Call this on a periodic tick.
    pub fn poll(&mut self) -> Vec<MediaEvent> {
        let mut events = Vec::new();

        if !self.announced {
            self.announced = true;
            events.push(MediaEvent::MetadataLoaded {
                duration_secs: self.duration_secs,
            });
            events.push(MediaEvent::FirstFrameReady);
        }

        if self.started_at.is_some() && self.position_secs() >= self.duration_secs {
            self.freeze();
            self.base_position_secs = self.duration_secs;
            events.push(MediaEvent::Ended);
        }

        events
    }

    fn freeze(&mut self) {
        self.base_position_secs = self.position_secs();
        self.started_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_clock_is_stopped_at_zero() {
        let clock = ClockMedia::new(10.0);
        assert!(!clock.is_playing());
        assert_abs_diff_eq!(clock.position_secs(), 0.0);
        assert_abs_diff_eq!(clock.duration_secs(), 10.0);
    }

    #[test]
    fn first_poll_announces_metadata_then_frame() {
        let mut clock = ClockMedia::new(8.0);
        let events = clock.poll();
        assert_eq!(
            events,
            vec![
                MediaEvent::MetadataLoaded { duration_secs: 8.0 },
                MediaEvent::FirstFrameReady,
            ]
        );
        // Announced only once
        assert!(clock.poll().is_empty());
    }

    #[test]
    fn play_is_accepted_and_starts_the_playhead() {
        let mut clock = ClockMedia::new(10.0);
        let events = clock.apply(MediaCommand::Play);
        assert_eq!(events, vec![MediaEvent::PlayAccepted]);
        assert!(clock.is_playing());
    }

    #[test]
    fn pause_freezes_the_position() {
        let mut clock = ClockMedia::new(10.0);
        clock.apply(MediaCommand::Play);
        clock.apply(MediaCommand::Pause);
        assert!(!clock.is_playing());
        let frozen = clock.position_secs();
        assert_abs_diff_eq!(clock.position_secs(), frozen);
    }

    #[test]
    fn seek_clamps_to_duration() {
        let mut clock = ClockMedia::new(10.0);
        clock.apply(MediaCommand::Seek { target_secs: 25.0 });
        assert_abs_diff_eq!(clock.position_secs(), 10.0);

        clock.apply(MediaCommand::Seek { target_secs: -3.0 });
        assert_abs_diff_eq!(clock.position_secs(), 0.0);

        clock.apply(MediaCommand::Seek { target_secs: 4.5 });
        assert_abs_diff_eq!(clock.position_secs(), 4.5);
    }

    #[test]
    fn seek_while_paused_stays_paused() {
        let mut clock = ClockMedia::new(10.0);
        clock.apply(MediaCommand::Seek { target_secs: 2.0 });
        assert!(!clock.is_playing());
        assert_abs_diff_eq!(clock.position_secs(), 2.0);
    }

    #[test]
    fn zero_length_clip_ends_on_first_playing_poll() {
        let mut clock = ClockMedia::new(0.0);
        clock.poll(); // metadata announcement
        clock.apply(MediaCommand::Play);
        let events = clock.poll();
        assert_eq!(events, vec![MediaEvent::Ended]);
        assert!(!clock.is_playing());
    }

    #[test]
    fn negative_duration_is_clamped_to_zero() {
        let clock = ClockMedia::new(-5.0);
        assert_abs_diff_eq!(clock.duration_secs(), 0.0);
    }
}
