//! Shared configuration types for Colosseum Waves
//!
//! These types are serialized to the user's config file and handed to the
//! session controller in colo-core.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

// ─────────────────────────────────────────────────────────────────────────────
// Player Location
// ─────────────────────────────────────────────────────────────────────────────

/// Controls when the player's position is embedded in LoS links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLocationConfig {
    /// Include the player location in wave spawn links
    #[serde(default = "default_true")]
    pub spawns: bool,
    /// Include the player location in reinforcement links
    #[serde(default = "default_true")]
    pub reinforcements: bool,
    /// Include the player location in on-demand "current LoS" links
    #[serde(default = "default_true")]
    pub current: bool,
}

impl Default for PlayerLocationConfig {
    fn default() -> Self {
        Self {
            spawns: true,
            reinforcements: true,
            current: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub player_location: PlayerLocationConfig,
}

impl AppConfig {
    /// Config with every player location toggle disabled.
    pub fn without_player_location() -> Self {
        Self {
            player_location: PlayerLocationConfig {
                spawns: false,
                reinforcements: false,
                current: false,
            },
        }
    }
}
