// SPDX-License-Identifier: MPL-2.0
//! Clip navigation over an album.
//!
//! The navigator owns the album and the current clip index, providing a
//! single source of truth for which clip is active. Navigation does not
//! wrap: requesting the next clip on the last one (or the previous clip
//! on the first) is a no-op, mirroring the viewer's arrow controls.

use super::{Album, Clip};

/// Navigation state snapshot for UI rendering.
///
/// Contains everything the view needs to render navigation controls
/// without direct access to the album.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationInfo {
    /// Whether there is a next clip to navigate to.
    pub has_next: bool,
    /// Whether there is a previous clip to navigate to.
    pub has_previous: bool,
    /// Whether the current clip is the first in the album.
    pub at_first: bool,
    /// Whether the current clip is the last in the album.
    pub at_last: bool,
    /// Current position in the album (0-indexed).
    pub current_index: usize,
    /// Total number of clips in the album.
    pub total_count: usize,
}

/// Index-addressed cursor over an album's clips.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipNavigator {
    album: Album,
    current_index: usize,
}

impl ClipNavigator {
    /// Creates a navigator positioned on the first clip.
    #[must_use]
    pub fn new(album: Album) -> Self {
        Self {
            album,
            current_index: 0,
        }
    }

    /// Returns the underlying album.
    #[must_use]
    pub fn album(&self) -> &Album {
        &self.album
    }

    /// Returns the current clip index.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the currently selected clip.
    #[must_use]
    pub fn current_clip(&self) -> Option<&Clip> {
        self.album.clip(self.current_index)
    }

    /// Returns the total number of clips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.album.len()
    }

    /// Returns true if the album holds no clips.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.album.is_empty()
    }

    /// Checks if the current clip is the first in the album.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current_index == 0
    }

    /// Checks if the current clip is the last in the album.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.album.is_empty() || self.current_index + 1 == self.album.len()
    }

    /// Advances to the next clip and returns the new index.
    ///
    /// Returns `None` (and keeps the position) when already on the last
    /// clip. Out-of-bounds navigation is a no-op, not an error.
    pub fn advance(&mut self) -> Option<usize> {
        if self.is_at_last() {
            return None;
        }
        self.current_index += 1;
        Some(self.current_index)
    }

    /// Retreats to the previous clip and returns the new index.
    ///
    /// Returns `None` (and keeps the position) when already on the first
    /// clip.
    pub fn retreat(&mut self) -> Option<usize> {
        if self.is_at_first() {
            return None;
        }
        self.current_index -= 1;
        Some(self.current_index)
    }

    /// Jumps directly to `index` if it is in range.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.album.len() {
            return None;
        }
        self.current_index = index;
        Some(index)
    }

    /// Returns a snapshot of the current navigation state for UI rendering.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            has_next: !self.is_at_last(),
            has_previous: !self.is_at_first(),
            at_first: self.is_at_first(),
            at_last: self.is_at_last(),
            current_index: self.current_index,
            total_count: self.album.len(),
        }
    }
}
