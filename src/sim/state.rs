//! Game state and core simulation types
//!
//! Everything the per-frame step reads and writes lives here. State is plain
//! data mutated directly by the physics and collision passes.

use serde::{Deserialize, Serialize};

use super::levels;
use super::rect::Rect;
use crate::tuning::Tuning;

/// The player-controlled box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity in units per tick (negative is up)
    pub velocity_y: f32,
    /// Recomputed from scratch by every collision pass, never sticky
    pub on_ground: bool,
    /// Set while the jump key is held; persists across ticks until released
    pub jump_held: bool,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            rect: Rect::new(
                tuning.player_spawn.x,
                tuning.player_spawn.y,
                tuning.player_width,
                tuning.player_height,
            ),
            velocity_y: 0.0,
            on_ground: false,
            jump_held: false,
        }
    }

    /// Unclamped position delta; the player may leave the screen on the left
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.rect.translate(dx, dy);
    }

    /// Accelerate downward and integrate. Runs exactly once per tick, after
    /// horizontal movement and before collision resolution.
    pub fn apply_gravity(&mut self, tuning: &Tuning) {
        self.velocity_y += tuning.gravity;
        self.rect.y += self.velocity_y;
    }

    /// Fire a jump. No-op while airborne or while the jump key is still held
    /// from the previous jump.
    pub fn jump(&mut self, tuning: &Tuning) {
        if self.on_ground && !self.jump_held {
            self.velocity_y = tuning.jump_force;
            self.on_ground = false;
            self.jump_held = true;
        }
    }

    /// Release the jump key. Releasing early while still moving up fast
    /// clamps the upward velocity, producing the short hop.
    pub fn release_jump(&mut self, tuning: &Tuning) {
        self.jump_held = false;
        if self.velocity_y < tuning.min_jump_force {
            self.velocity_y = tuning.min_jump_force;
        }
    }
}

/// A coin pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
    /// Monotonic false-to-true within a level instance
    pub collected: bool,
}

impl Coin {
    pub fn new(spot: glam::Vec2, size: f32) -> Self {
        Self {
            rect: Rect::new(spot.x, spot.y, size, size),
            collected: false,
        }
    }
}

/// Explicit level transition taken synchronously within the frame it is
/// detected; `Playing` is the only steady state, so `None` means stay put
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    /// Player fell off the bottom; rebuild the same level
    Reset,
    /// Level cleared; rebuild at the next (cyclic) level index
    Advance,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Immutable gameplay configuration
    pub tuning: Tuning,
    /// Current level index (cyclic modulo `LEVEL_COUNT`)
    pub level_index: usize,
    pub player: Player,
    /// Static level geometry, in table order
    pub platforms: Vec<Rect>,
    /// Coins for this level instance, in table order
    pub coins: Vec<Coin>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a game at the first level
    pub fn new(tuning: Tuning) -> Self {
        let mut state = Self {
            tuning,
            level_index: 0,
            player: Player::new(&tuning),
            platforms: Vec::new(),
            coins: Vec::new(),
            time_ticks: 0,
        };
        state.load_level(0);
        state
    }

    /// Rebuild player, platforms and coins from the level tables. Used both
    /// for the initial load and for reset/advance transitions.
    pub fn load_level(&mut self, index: usize) {
        self.level_index = index % levels::LEVEL_COUNT;
        self.player = Player::new(&self.tuning);
        self.platforms = levels::platforms(self.level_index).to_vec();
        self.coins = levels::coin_spots(self.level_index)
            .iter()
            .map(|&spot| Coin::new(spot, self.tuning.coin_size))
            .collect();
    }

    /// Count of coins picked up so far this level
    pub fn coins_collected(&self) -> usize {
        self.coins.iter().filter(|c| c.collected).count()
    }

    /// Vacuously true for a level with no coins
    pub fn all_coins_collected(&self) -> bool {
        self.coins.iter().all(|c| c.collected)
    }

    /// Read-only view handed to the render collaborator each frame
    pub fn render_view(&self) -> RenderView<'_> {
        RenderView {
            platforms: &self.platforms,
            coins: &self.coins,
            player: self.player.rect,
            level_number: self.level_index + 1,
            coins_collected: self.coins_collected(),
            coins_total: self.coins.len(),
            show_hint: !self.all_coins_collected()
                && self.player.rect.right()
                    > self.tuning.window_width - self.tuning.edge_hint_distance,
        }
    }
}

/// Everything the renderer and HUD need for one frame
#[derive(Debug)]
pub struct RenderView<'a> {
    pub platforms: &'a [Rect],
    pub coins: &'a [Coin],
    pub player: Rect,
    /// 1-based for display
    pub level_number: usize,
    pub coins_collected: usize,
    pub coins_total: usize,
    /// True when coins remain and the player is near the right edge
    pub show_hint: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_game_loads_first_level() {
        let state = GameState::new(Tuning::default());
        assert_eq!(state.level_index, 0);
        assert_eq!(state.platforms.len(), 4);
        assert_eq!(state.coins.len(), 3);
        assert_eq!(state.player.rect, Rect::new(50.0, 500.0, 30.0, 50.0));
        assert_eq!(state.player.velocity_y, 0.0);
        assert!(!state.player.on_ground);
        assert!(!state.player.jump_held);
    }

    #[test]
    fn test_load_level_wraps_index() {
        let mut state = GameState::new(Tuning::default());
        state.load_level(7);
        assert_eq!(state.level_index, 2);
        assert_eq!(state.coins.len(), 5);
    }

    #[test]
    fn test_jump_fires_only_from_ground() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);

        // Airborne: no-op
        player.jump(&tuning);
        assert_eq!(player.velocity_y, 0.0);
        assert!(!player.jump_held);

        // Grounded: fires
        player.on_ground = true;
        player.jump(&tuning);
        assert_eq!(player.velocity_y, tuning.jump_force);
        assert!(!player.on_ground);
        assert!(player.jump_held);

        // Held: no-op even if grounded again
        player.on_ground = true;
        player.velocity_y = 0.0;
        player.jump(&tuning);
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn test_release_jump_short_hop() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.on_ground = true;
        player.jump(&tuning);
        assert_eq!(player.velocity_y, -18.0);

        player.release_jump(&tuning);
        assert_eq!(player.velocity_y, -10.0);
        assert!(!player.jump_held);
    }

    #[test]
    fn test_release_jump_leaves_slow_velocity_alone() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);

        player.velocity_y = -5.0;
        player.release_jump(&tuning);
        assert_eq!(player.velocity_y, -5.0);

        player.velocity_y = 7.0;
        player.release_jump(&tuning);
        assert_eq!(player.velocity_y, 7.0);
    }

    #[test]
    fn test_all_coins_collected_vacuous_when_empty() {
        let mut state = GameState::new(Tuning::default());
        state.coins.clear();
        assert!(state.all_coins_collected());
    }

    #[test]
    fn test_render_view_counts() {
        let mut state = GameState::new(Tuning::default());
        state.coins[0].collected = true;
        let view = state.render_view();
        assert_eq!(view.level_number, 1);
        assert_eq!(view.coins_collected, 1);
        assert_eq!(view.coins_total, 3);
        assert_eq!(view.platforms.len(), 4);
    }

    #[test]
    fn test_hint_boundary() {
        let mut state = GameState::new(Tuning::default());

        // right = 700 exactly: not yet within hint range
        state.player.rect.x = 670.0;
        assert!(!state.render_view().show_hint);

        // right = 710: hint shows while coins remain
        state.player.rect.x = 680.0;
        assert!(state.render_view().show_hint);

        // All coins collected: no hint even at the edge
        for coin in &mut state.coins {
            coin.collected = true;
        }
        assert!(!state.render_view().show_hint);
    }

    proptest! {
        #[test]
        fn release_jump_clamps_to_min_jump_force(vy in -40.0f32..40.0) {
            let tuning = Tuning::default();
            let mut player = Player::new(&tuning);
            player.velocity_y = vy;
            player.jump_held = true;

            player.release_jump(&tuning);

            prop_assert!(!player.jump_held);
            prop_assert_eq!(player.velocity_y, vy.max(tuning.min_jump_force));
        }
    }
}
