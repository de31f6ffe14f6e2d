//! Per-frame simulation step
//!
//! Advances the game deterministically: input dispatch, horizontal movement,
//! gravity, collision resolution, coin pickup, then the level transition
//! check. The tuned constants are per-frame quantities, so the fixed 60 Hz
//! step is itself the unit of time and `tick` takes no `dt`.

use super::collision::{collect_coins, resolve_platform_collisions};
use super::levels::LEVEL_COUNT;
use super::state::{GameState, Transition};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move-left key currently held
    pub left: bool,
    /// Move-right key currently held
    pub right: bool,
    /// Jump key went down this frame (one-shot)
    pub jump_pressed: bool,
    /// Jump key came up this frame (one-shot)
    pub jump_released: bool,
}

/// Advance the game state by one fixed step
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Jump edges first, press before release, so a tap contained in a single
    // frame still produces the short hop
    if input.jump_pressed {
        state.player.jump(&state.tuning);
    }
    if input.jump_released {
        state.player.release_jump(&state.tuning);
    }

    // Horizontal intent; opposing keys cancel out
    let mut dx = 0.0;
    if input.left {
        dx -= state.tuning.player_speed;
    }
    if input.right {
        dx += state.tuning.player_speed;
    }
    state.player.move_by(dx, 0.0);

    state.player.apply_gravity(&state.tuning);

    resolve_platform_collisions(&mut state.player, &state.platforms);
    collect_coins(&state.player.rect, &mut state.coins);

    let transition = check_transition(state);
    apply_transition(state, transition);

    state.time_ticks += 1;
}

/// Pure transition check, run after collision resolution.
///
/// Falling out is checked first; under normal geometry the two conditions
/// cannot hold at once.
pub fn check_transition(state: &GameState) -> Transition {
    if state.player.rect.top() > state.tuning.window_height {
        return Transition::Reset;
    }
    if state.player.rect.right() > state.tuning.window_width && state.all_coins_collected() {
        return Transition::Advance;
    }
    Transition::None
}

/// Take a transition, rebuilding the level state as needed
pub fn apply_transition(state: &mut GameState, transition: Transition) {
    match transition {
        Transition::None => {}
        Transition::Reset => state.load_level(state.level_index),
        Transition::Advance => state.load_level((state.level_index + 1) % LEVEL_COUNT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::levels;
    use crate::tuning::Tuning;

    fn settled_state() -> GameState {
        // One tick with no input drops the spawned player onto the floor
        let mut state = GameState::new(Tuning::default());
        tick(&mut state, &TickInput::default());
        assert!(state.player.on_ground);
        state
    }

    #[test]
    fn test_player_rests_on_floor() {
        let mut state = GameState::new(Tuning::default());

        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.player.rect.bottom(), 550.0);
            assert!(state.player.on_ground);
        }
        assert_eq!(state.time_ticks, 10);
    }

    #[test]
    fn test_horizontal_movement_is_unclamped() {
        let mut state = settled_state();
        let x = state.player.rect.x;

        tick(&mut state, &TickInput { right: true, ..Default::default() });
        assert_eq!(state.player.rect.x, x + 5.0);

        // Moving left past the screen edge is allowed; nothing pushes back
        state.player.rect.x = 0.0;
        state.player.rect.y = 300.0;
        tick(&mut state, &TickInput { left: true, ..Default::default() });
        assert_eq!(state.player.rect.x, -5.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut state = settled_state();
        let x = state.player.rect.x;
        tick(
            &mut state,
            &TickInput { left: true, right: true, ..Default::default() },
        );
        assert_eq!(state.player.rect.x, x);
    }

    #[test]
    fn test_jump_leaves_ground() {
        let mut state = settled_state();

        tick(&mut state, &TickInput { jump_pressed: true, ..Default::default() });

        assert!(!state.player.on_ground);
        assert!(state.player.jump_held);
        // One tick of gravity has already been applied to the jump impulse
        let expected = -18.0 + state.tuning.gravity;
        assert!((state.player.velocity_y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_jump_pressed_midair_is_noop() {
        let mut state = settled_state();
        tick(&mut state, &TickInput { jump_pressed: true, ..Default::default() });
        let velocity = state.player.velocity_y;

        // Second press while airborne and still held: nothing happens
        tick(&mut state, &TickInput { jump_pressed: true, ..Default::default() });
        let expected = velocity + state.tuning.gravity;
        assert!((state.player.velocity_y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_tap_jump_short_hop() {
        let mut state = settled_state();

        // Press and release within the same tick: the -18 impulse is clamped
        // to -10 before gravity integrates it
        tick(
            &mut state,
            &TickInput {
                jump_pressed: true,
                jump_released: true,
                ..Default::default()
            },
        );

        let expected = -10.0 + state.tuning.gravity;
        assert!((state.player.velocity_y - expected).abs() < 1e-4);
        assert!(!state.player.jump_held);
    }

    #[test]
    fn test_fall_out_resets_level() {
        let mut state = settled_state();
        state.coins[0].collected = true;
        state.player.rect.y = 650.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.level_index, 0);
        assert_eq!(state.player.rect.x, 50.0);
        assert_eq!(state.player.rect.y, 500.0);
        assert!(state.coins.iter().all(|c| !c.collected));
    }

    #[test]
    fn test_exit_with_all_coins_advances() {
        let mut state = settled_state();
        for coin in &mut state.coins {
            coin.collected = true;
        }
        state.player.rect.x = 780.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.level_index, 1);
        assert_eq!(state.platforms, levels::platforms(1).to_vec());
        assert_eq!(state.coins.len(), 4);
        assert!(state.coins.iter().all(|c| !c.collected));
    }

    #[test]
    fn test_exit_with_missing_coins_does_not_advance() {
        let mut state = settled_state();
        state.coins[0].collected = true;
        state.coins[1].collected = true;
        state.player.rect.x = 780.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.level_index, 0);
        assert_eq!(state.coins_collected(), 2);
    }

    #[test]
    fn test_advance_wraps_to_first_level() {
        let mut state = GameState::new(Tuning::default());
        state.load_level(LEVEL_COUNT - 1);
        for coin in &mut state.coins {
            coin.collected = true;
        }
        state.player.rect.x = 780.0;
        state.player.rect.y = 450.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.level_index, 0);
    }

    #[test]
    fn test_coinless_level_advances_vacuously() {
        let mut state = settled_state();
        state.coins.clear();
        state.player.rect.x = 780.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.level_index, 1);
    }

    #[test]
    fn test_check_transition_priority() {
        let mut state = GameState::new(Tuning::default());

        assert_eq!(check_transition(&state), Transition::None);

        state.player.rect.y = 650.0;
        assert_eq!(check_transition(&state), Transition::Reset);

        state.player.rect.y = 450.0;
        state.player.rect.x = 790.0;
        for coin in &mut state.coins {
            coin.collected = true;
        }
        assert_eq!(check_transition(&state), Transition::Advance);
    }

    #[test]
    fn test_standing_under_coin_collects_it() {
        let mut state = settled_state();
        // The first coin floats just above the middle ledge; a player
        // standing there reaches it
        state.player.rect.x = 395.0;
        state.player.rect.y = 350.0;

        tick(&mut state, &TickInput::default());

        assert!(state.player.on_ground);
        assert!(state.coins[0].collected);
        assert_eq!(state.coins_collected(), 1);
    }
}
