// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Album(String),
    Media(MediaError),
}

/// Specific error types for clip playback issues.
///
/// Failures stay local to the playback layer and are surfaced to the host
/// as state, never thrown across the host boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// Media failed to load or decode. Persistent; no automatic retry.
    LoadFailed(String),

    /// A play request was rejected (autoplay policy or backend refusal).
    /// Recoverable: the clip stays paused and an explicit user gesture
    /// may succeed where the automatic request did not.
    PlayRejected(String),

    /// Duration/metadata was needed but has not been reported yet.
    MetadataUnavailable,

    /// The media backend channel is gone (backend shut down).
    BackendDisconnected,
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::LoadFailed(msg) => write!(f, "Media failed to load: {}", msg),
            MediaError::PlayRejected(msg) => write!(f, "Play request rejected: {}", msg),
            MediaError::MetadataUnavailable => write!(f, "Media metadata not yet available"),
            MediaError::BackendDisconnected => write!(f, "Media backend disconnected"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Album(e) => write!(f, "Album Error: {}", e),
            Error::Media(e) => write!(f, "Media Error: {}", e),
        }
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Album(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_json_error_produces_album_variant() {
        let json_error = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Album(_)));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn media_error_wraps_into_error() {
        let err: Error = MediaError::MetadataUnavailable.into();
        assert!(matches!(err, Error::Media(MediaError::MetadataUnavailable)));
    }

    #[test]
    fn media_error_display() {
        let err = MediaError::PlayRejected("user gesture required".to_string());
        assert!(format!("{}", err).contains("user gesture required"));
    }

    #[test]
    fn load_failed_is_distinct_from_play_rejected() {
        let load = MediaError::LoadFailed("bad codec".into());
        let play = MediaError::PlayRejected("policy".into());
        assert_ne!(load, play);
    }
}
