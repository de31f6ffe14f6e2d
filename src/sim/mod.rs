//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed per-frame steps only
//! - Stable iteration order (platforms and coins in table order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod levels;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{collect_coins, resolve_platform_collisions};
pub use levels::{COIN_SPOTS, LEVELS, LEVEL_COUNT};
pub use rect::Rect;
pub use state::{Coin, GameState, Player, RenderView, Transition};
pub use tick::{TickInput, apply_transition, check_transition, tick};
