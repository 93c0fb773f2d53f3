//! User configuration: optional defaults merged under CLI flags.
//!
//! A missing config file is the default config; a malformed one is noted on
//! stderr and ignored.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::reveal::DEFAULT_SPEED_CPS;
use crate::types::PresentOptions;

/// Config filename within the termdeck config directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Persistent user defaults. Every field optional; absent means built-in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default title reveal speed, characters per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Default start slide, 1-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
}

/// `<config_dir>/termdeck/config.json`, if a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("termdeck").join(CONFIG_FILENAME))
}

/// Load the user config, falling back to defaults on any problem.
pub fn load_or_default() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let Ok(raw) = std::fs::read_to_string(&path) else {
        return Config::default();
    };
    match serde_json::from_str(&raw) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Note: ignoring malformed config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Resolve effective presentation settings: CLI flag beats config file
/// beats built-in default.
pub fn resolve(
    cli_speed: Option<f64>,
    cli_start: Option<usize>,
    config: &Config,
) -> PresentOptions {
    PresentOptions {
        speed_cps: cli_speed.or(config.speed).unwrap_or(DEFAULT_SPEED_CPS),
        start: cli_start.or(config.start).unwrap_or(1),
    }
}

// ============================================================================
// TESTS
// ============================================================================
