// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use clip_lens::config;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Point media resolution at a remote bucket
//! config.media_base_url = Some("https://media.example.com".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ClipLens";

/// Total pointer travel (device pixels) that maps onto a full clip.
pub const DEFAULT_SCRUB_TRAVEL: f32 = 5000.0;

/// Lower bound for configured scrub travel. Anything shorter makes a clip
/// jump to its end on the first pointer twitch.
pub const MIN_SCRUB_TRAVEL: f32 = 500.0;

/// Upper bound for configured scrub travel.
pub const MAX_SCRUB_TRAVEL: f32 = 50_000.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL prepended to clip paths (remote bucket). `None` means
    /// clip paths are used as-is (local files).
    pub media_base_url: Option<String>,
    /// Pointer travel in device pixels for a full scrub through a clip.
    #[serde(default)]
    pub scrub_travel: Option<f32>,
    /// Disables the pointer scrubbing subsystem entirely (touch hosts).
    #[serde(default)]
    pub touch_mode: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            media_base_url: None,
            scrub_travel: Some(DEFAULT_SCRUB_TRAVEL),
            touch_mode: Some(false),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
