// SPDX-License-Identifier: MPL-2.0
//! Integration tests for album loading, navigation, and URL resolution.

use clip_lens::album::{Album, ClipNavigator};
use clip_lens::config::{self, Config};
use clip_lens::media::MediaSource;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_album(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).expect("failed to write album file");
    path
}

const COASTLINE: &str = r#"{
    "title": "Coastline",
    "description": "Three mornings on the same beach",
    "clips": [
        {"src": "/films/coastline/dawn.mp4", "caption": "Dawn", "duration_secs": 12.5},
        {"src": "films/coastline/tide.mp4", "caption": "Tide", "duration_secs": 8.0},
        {"src": "films/coastline/dusk.mp4", "description": "Last light", "duration_secs": 21.0}
    ]
}"#;

#[test]
fn album_loads_and_navigates_without_wrapping() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = write_album(temp_dir.path(), "coastline.json", COASTLINE);

    let album = Album::load_from_path(&path).expect("load failed");
    let mut navigator = ClipNavigator::new(album);

    assert_eq!(navigator.len(), 3);
    assert_eq!(navigator.current_clip().unwrap().caption.as_deref(), Some("Dawn"));

    assert_eq!(navigator.advance(), Some(1));
    assert_eq!(navigator.advance(), Some(2));
    assert_eq!(navigator.advance(), None, "no wrap at the end");

    let info = navigator.navigation_info();
    assert!(info.at_last);
    assert!(info.has_previous);
    assert_eq!(info.current_index, 2);

    assert_eq!(navigator.retreat(), Some(1));
    assert_eq!(navigator.retreat(), Some(0));
    assert_eq!(navigator.retreat(), None, "no wrap at the start");
}

#[test]
fn local_and_remote_sources_resolve_album_paths() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = write_album(temp_dir.path(), "coastline.json", COASTLINE);
    let album = Album::load_from_path(&path).expect("load failed");

    let local = MediaSource::local();
    let remote = MediaSource::remote("https://media.example.com/");

    // Leading slashes in authored paths normalize the same way for both
    assert_eq!(
        local.resolve(&album.clips[0].src).as_deref(),
        Some("films/coastline/dawn.mp4")
    );
    assert_eq!(
        remote.resolve(&album.clips[0].src).as_deref(),
        Some("https://media.example.com/films/coastline/dawn.mp4")
    );
    assert_eq!(
        remote.resolve(&album.clips[1].src).as_deref(),
        Some("https://media.example.com/films/coastline/tide.mp4")
    );
}

#[test]
fn configured_base_url_feeds_the_media_source() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let config_path = temp_dir.path().join("settings.toml");

    let config = Config {
        media_base_url: Some("https://bucket.example.net".to_string()),
        scrub_travel: Some(6000.0),
        touch_mode: Some(false),
    };
    config::save_to_path(&config, &config_path).expect("save failed");

    let loaded = config::load_from_path(&config_path).expect("load failed");
    let source = MediaSource::from_base_url(loaded.media_base_url.as_deref());

    assert_eq!(
        source.resolve("films/a.mp4").as_deref(),
        Some("https://bucket.example.net/films/a.mp4")
    );
}

#[test]
fn malformed_album_files_surface_as_errors() {
    let temp_dir = tempdir().expect("failed to create temp dir");

    let not_json = write_album(temp_dir.path(), "bad.json", "{broken");
    assert!(Album::load_from_path(&not_json).is_err());

    let no_clips = write_album(temp_dir.path(), "empty.json", r#"{"title": "X", "clips": []}"#);
    assert!(Album::load_from_path(&no_clips).is_err());

    assert!(Album::load_from_path(&temp_dir.path().join("missing.json")).is_err());
}
