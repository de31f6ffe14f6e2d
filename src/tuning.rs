//! Gameplay tuning
//!
//! One immutable value built at startup and passed into the simulation, so
//! the core never reads process-wide globals. Defaults reproduce the shipped
//! level feel; on the web a saved override set is picked up from
//! LocalStorage.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Immutable gameplay configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield width
    pub window_width: f32,
    /// Playfield height
    pub window_height: f32,
    /// Horizontal speed (units per tick)
    pub player_speed: f32,
    /// Downward acceleration (units per tick squared)
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_force: f32,
    /// Upward velocity floor applied when the jump is released early
    pub min_jump_force: f32,
    /// Player box size
    pub player_width: f32,
    pub player_height: f32,
    /// Player spawn point (top-left corner)
    pub player_spawn: Vec2,
    /// Coin box size
    pub coin_size: f32,
    /// Distance from the right edge at which the coin hint shows
    pub edge_hint_distance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_width: consts::WINDOW_WIDTH,
            window_height: consts::WINDOW_HEIGHT,
            player_speed: consts::PLAYER_SPEED,
            gravity: consts::GRAVITY,
            jump_force: consts::JUMP_FORCE,
            min_jump_force: consts::MIN_JUMP_FORCE,
            player_width: consts::PLAYER_WIDTH,
            player_height: consts::PLAYER_HEIGHT,
            player_spawn: consts::PLAYER_SPAWN,
            coin_size: consts::COIN_SIZE,
            edge_hint_distance: consts::EDGE_HINT_DISTANCE,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "coin_dash_tuning";

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
