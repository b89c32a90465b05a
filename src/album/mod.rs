// SPDX-License-Identifier: MPL-2.0
//! Album content types and loading.
//!
//! Albums are flat JSON files (`<slug>.json`) describing an ordered list
//! of clips. The viewer never writes these files; they are authored
//! alongside the media they reference.

pub mod navigator;

pub use navigator::{ClipNavigator, NavigationInfo};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One playable media unit within an album.
///
/// Immutable once constructed; owned by the [`Album`], never mutated by
/// the playback layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Path to the clip media, relative to the media root. Resolution to
    /// a playable URL happens in [`crate::media::MediaSource`].
    pub src: String,

    /// Short caption rendered next to the playback controls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Longer description rendered below the clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Clip length in seconds, as authored. Lets headless backends know
    /// the clip length without decoding the file.
    #[serde(default)]
    pub duration_secs: Option<f64>,
}

/// An ordered collection of clips with album-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub clips: Vec<Clip>,
}

impl Album {
    /// Loads an album from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Album`] if it is not a valid album document or contains
    /// no clips.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let album: Album = serde_json::from_str(&content)?;
        if album.clips.is_empty() {
            return Err(Error::Album(format!(
                "album '{}' contains no clips",
                album.title
            )));
        }
        Ok(album)
    }

    /// Returns the number of clips in the album.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Returns true if the album contains no clips.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Returns the clip at `index`, if any.
    #[must_use]
    pub fn clip(&self, index: usize) -> Option<&Clip> {
        self.clips.get(index)
    }
}
