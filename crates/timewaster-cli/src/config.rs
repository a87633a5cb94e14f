//! TOML-based presentation configuration.
//!
//! Knobs for the interactive `play` command only -- the core session
//! contract has no configuration surface. Stored at
//! `~/.config/timewaster/config.toml`; a missing file yields defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Presentation configuration for `play`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Show sarcastic flavor text.
    #[serde(default = "default_true")]
    pub flavor: bool,
    /// Seconds the warning-page button "stabilizes" before accepting input.
    #[serde(default = "default_intro_delay")]
    pub intro_delay_secs: u64,
    /// Seconds of screen shake before leaving the warning page.
    #[serde(default = "default_transition_delay")]
    pub transition_delay_secs: u64,
    /// Milliseconds between staggered card flips.
    #[serde(default = "default_flip_stagger")]
    pub flip_stagger_ms: u64,
}

fn default_true() -> bool {
    true
}
fn default_intro_delay() -> u64 {
    2
}
fn default_transition_delay() -> u64 {
    3
}
fn default_flip_stagger() -> u64 {
    100
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            flavor: default_true(),
            intro_delay_secs: default_intro_delay(),
            transition_delay_secs: default_transition_delay(),
            flip_stagger_ms: default_flip_stagger(),
        }
    }
}

impl PlayConfig {
    /// Location of the config file.
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("timewaster")
            .join("config.toml")
    }

    /// Load from disk, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&raw)?)
    }
}
