// SPDX-License-Identifier: MPL-2.0
//! Media URL resolution.
//!
//! Clip paths in album files are relative to a media root. Depending on
//! deployment that root is either the local filesystem (paths pass
//! through untouched) or a remote bucket (paths are rewritten against a
//! base URL). The base URL is injected at construction time; this module
//! never reads configuration or the environment on its own.

/// Resolves album clip paths into playable URLs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaSource {
    base_url: Option<String>,
}

impl MediaSource {
    /// Creates a source that passes local paths through unchanged.
    #[must_use]
    pub fn local() -> Self {
        Self { base_url: None }
    }

    /// Creates a source that rewrites paths against a remote base URL.
    ///
    /// Trailing slashes on the base URL are normalized away; an empty
    /// base behaves like [`MediaSource::local`].
    #[must_use]
    pub fn remote(base_url: impl Into<String>) -> Self {
        let trimmed = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url: if trimmed.is_empty() { None } else { Some(trimmed) },
        }
    }

    /// Creates a source from an optional configured base URL.
    #[must_use]
    pub fn from_base_url(base_url: Option<&str>) -> Self {
        match base_url {
            Some(url) => Self::remote(url),
            None => Self::local(),
        }
    }

    /// Resolves a clip path into a playable URL.
    ///
    /// Leading slashes are stripped before joining so that albums may
    /// write paths either way. Returns `None` for empty paths, which are
    /// authoring mistakes rather than playable media.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<String> {
        let clean = path.trim_start_matches('/');
        if clean.is_empty() {
            return None;
        }
        match &self.base_url {
            Some(base) => Some(format!("{base}/{clean}")),
            None => Some(clean.to_string()),
        }
    }
}
