// SPDX-License-Identifier: MPL-2.0
//! Pointer-movement accumulator for scrubbing.
//!
//! Scrubbing maps *total accumulated pointer movement* onto the clip
//! timeline: `progress = min(accumulated / travel, 1.0)`. Movement is
//! the Euclidean magnitude between consecutive pointer positions and is
//! direction-agnostic: any hand motion advances the clip, not just
//! rightward motion. The resulting seek targets are absolute positions,
//! which makes the mapping a deterministic function of accumulated
//! motion: event rate, batching, and ordering cannot cause drift.

use crate::config::{DEFAULT_SCRUB_TRAVEL, MAX_SCRUB_TRAVEL, MIN_SCRUB_TRAVEL};

/// Total pointer travel (device pixels) that spans a full clip.
///
/// Values outside the supported range are clamped.
///
/// # Example
///
/// ```
/// use clip_lens::controller::ScrubTravel;
///
/// let travel = ScrubTravel::new(5000.0);
/// assert_eq!(travel.value(), 5000.0);
///
/// // Values outside range are clamped
/// let too_short = ScrubTravel::new(10.0);
/// assert_eq!(too_short.value(), 500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubTravel(f32);

impl ScrubTravel {
    /// Creates a new travel length, clamping to the supported range.
    #[must_use]
    pub fn new(travel: f32) -> Self {
        Self(travel.clamp(MIN_SCRUB_TRAVEL, MAX_SCRUB_TRAVEL))
    }

    /// Returns the travel length in device pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ScrubTravel {
    fn default() -> Self {
        Self(DEFAULT_SCRUB_TRAVEL)
    }
}

/// Accumulated-movement scrub state for the active clip.
#[derive(Debug, Clone, Default)]
pub struct ScrubState {
    /// Whether the pointer is currently inside the media surface and
    /// scrubbing is engaged.
    active: bool,

    /// Cumulative Euclidean pointer-movement magnitude since scrubbing
    /// began (or since the accumulator was seeded).
    accumulated: f32,

    /// Last observed pointer position during the active scrub.
    last_position: Option<(f32, f32)>,
}

impl ScrubState {
    /// Returns true while scrubbing is engaged.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the accumulated movement magnitude.
    #[must_use]
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Engages scrubbing at the given pointer position.
    ///
    /// The accumulator is seeded from the clip's *current* position, not
    /// zero, so re-entering the surface continues from wherever the
    /// playhead sits instead of snapping back to the start.
    pub fn enter(
        &mut self,
        position: (f32, f32),
        current_secs: f64,
        duration_secs: f64,
        travel: ScrubTravel,
    ) {
        self.active = true;
        self.accumulated = seed_for_time(current_secs, duration_secs, travel);
        self.last_position = Some(position);
    }

    /// Disengages scrubbing.
    ///
    /// The accumulated value is discarded: re-entry reseeds from the
    /// current media time, so a persisted value would never be read.
    pub fn leave(&mut self) {
        self.active = false;
        self.accumulated = 0.0;
        self.last_position = None;
    }

    /// Records a pointer movement and returns its magnitude.
    ///
    /// Updates the stored pointer position and, for non-zero movement,
    /// adds the Euclidean delta to the accumulator. Returns 0.0 when
    /// scrubbing is not engaged or no previous position exists.
    pub fn record_movement(&mut self, position: (f32, f32)) -> f32 {
        if !self.active {
            return 0.0;
        }
        let Some((last_x, last_y)) = self.last_position else {
            self.last_position = Some(position);
            return 0.0;
        };

        let dx = position.0 - last_x;
        let dy = position.1 - last_y;
        let movement = (dx * dx + dy * dy).sqrt();

        if movement > 0.0 {
            self.accumulated += movement;
        }
        self.last_position = Some(position);
        movement
    }

    /// Returns the absolute seek target for the current accumulator.
    #[must_use]
    pub fn target_secs(&self, duration_secs: f64, travel: ScrubTravel) -> f64 {
        target_secs(self.accumulated, duration_secs, travel)
    }
}

/// Seeds an accumulator so it corresponds to `current_secs` of playback.
#[must_use]
pub fn seed_for_time(current_secs: f64, duration_secs: f64, travel: ScrubTravel) -> f32 {
    if duration_secs <= 0.0 || current_secs <= 0.0 {
        return 0.0;
    }
    let progress = (current_secs / duration_secs).clamp(0.0, 1.0);
    // f32 is exact up to 2^24; travel values are a few thousand pixels.
    #[allow(clippy::cast_possible_truncation)]
    {
        (progress * f64::from(travel.value())) as f32
    }
}

/// Fraction of the clip covered by `accumulated` movement, capped at 1.
#[must_use]
pub fn progress(accumulated: f32, travel: ScrubTravel) -> f64 {
    (f64::from(accumulated) / f64::from(travel.value())).min(1.0)
}

/// Absolute seek target for `accumulated` movement over a clip.
#[must_use]
pub fn target_secs(accumulated: f32, duration_secs: f64, travel: ScrubTravel) -> f64 {
    progress(accumulated, travel) * duration_secs
}
