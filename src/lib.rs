//! Coin Dash - a coin-collecting 2D platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level state)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Gameplay configuration handed to the simulation at startup

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz; one tick is one game frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Player box size and spawn point (top-left corner, y grows down)
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(50.0, 500.0);

    /// Horizontal speed (units per tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Downward acceleration (units per tick squared)
    pub const GRAVITY: f32 = 0.7;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_FORCE: f32 = -18.0;
    /// Upward velocity is clamped to this when the jump key is released early
    pub const MIN_JUMP_FORCE: f32 = -10.0;

    /// Coin box size (the rendered disc has half this diameter as radius)
    pub const COIN_SIZE: f32 = 20.0;
    /// Distance from the right edge at which the collect-all-coins hint shows
    pub const EDGE_HINT_DISTANCE: f32 = 100.0;
}
