//! Level layout tables
//!
//! Hand-tuned level geometry, compiled in. Each level is an ordered list of
//! platform rectangles plus an ordered list of coin origin points (top-left
//! corners). The tables are read-only; the game state clones fresh entities
//! from them on every level load.

use glam::Vec2;

use super::rect::Rect;

/// Number of levels; the sequence is cyclic
pub const LEVEL_COUNT: usize = 5;

/// Platform rectangles per level
pub static LEVELS: [&[Rect]; LEVEL_COUNT] = [
    // Level 1 - full floor with a few ledges
    &[
        Rect::new(0.0, 550.0, 800.0, 50.0),
        Rect::new(300.0, 400.0, 200.0, 20.0),
        Rect::new(100.0, 300.0, 200.0, 20.0),
        Rect::new(500.0, 300.0, 200.0, 20.0),
    ],
    // Level 2 - staircase climb
    &[
        Rect::new(0.0, 550.0, 800.0, 50.0),
        Rect::new(100.0, 450.0, 100.0, 20.0),
        Rect::new(300.0, 350.0, 100.0, 20.0),
        Rect::new(500.0, 250.0, 100.0, 20.0),
        Rect::new(700.0, 150.0, 100.0, 20.0),
    ],
    // Level 3 - gaps in the floor
    &[
        Rect::new(0.0, 550.0, 200.0, 50.0),
        Rect::new(300.0, 550.0, 200.0, 50.0),
        Rect::new(600.0, 550.0, 200.0, 50.0),
        Rect::new(200.0, 400.0, 100.0, 20.0),
        Rect::new(500.0, 400.0, 100.0, 20.0),
    ],
    // Level 4 - zig-zag ascent
    &[
        Rect::new(0.0, 550.0, 800.0, 50.0),
        Rect::new(100.0, 450.0, 100.0, 20.0),
        Rect::new(400.0, 350.0, 100.0, 20.0),
        Rect::new(200.0, 250.0, 100.0, 20.0),
        Rect::new(600.0, 200.0, 100.0, 20.0),
        Rect::new(300.0, 150.0, 100.0, 20.0),
    ],
    // Level 5 - sparse footing all the way up
    &[
        Rect::new(0.0, 550.0, 100.0, 50.0),
        Rect::new(200.0, 500.0, 100.0, 20.0),
        Rect::new(400.0, 450.0, 100.0, 20.0),
        Rect::new(600.0, 400.0, 100.0, 20.0),
        Rect::new(400.0, 300.0, 100.0, 20.0),
        Rect::new(200.0, 200.0, 100.0, 20.0),
        Rect::new(700.0, 150.0, 100.0, 20.0),
    ],
];

/// Coin origin points per level
pub static COIN_SPOTS: [&[Vec2]; LEVEL_COUNT] = [
    // Level 1 - 3 coins
    &[
        Vec2::new(400.0, 350.0),
        Vec2::new(150.0, 250.0),
        Vec2::new(600.0, 250.0),
    ],
    // Level 2 - 4 coins
    &[
        Vec2::new(150.0, 400.0),
        Vec2::new(350.0, 300.0),
        Vec2::new(550.0, 200.0),
        Vec2::new(750.0, 100.0),
    ],
    // Level 3 - 5 coins
    &[
        Vec2::new(100.0, 500.0),
        Vec2::new(400.0, 500.0),
        Vec2::new(700.0, 500.0),
        Vec2::new(250.0, 350.0),
        Vec2::new(550.0, 350.0),
    ],
    // Level 4 - 6 coins
    &[
        Vec2::new(150.0, 400.0),
        Vec2::new(450.0, 300.0),
        Vec2::new(250.0, 200.0),
        Vec2::new(650.0, 150.0),
        Vec2::new(350.0, 100.0),
        Vec2::new(50.0, 500.0),
    ],
    // Level 5 - 7 coins
    &[
        Vec2::new(50.0, 500.0),
        Vec2::new(250.0, 450.0),
        Vec2::new(450.0, 400.0),
        Vec2::new(650.0, 350.0),
        Vec2::new(450.0, 250.0),
        Vec2::new(250.0, 150.0),
        Vec2::new(750.0, 100.0),
    ],
];

/// Platform table for a level index
pub fn platforms(index: usize) -> &'static [Rect] {
    LEVELS[index % LEVEL_COUNT]
}

/// Coin origin table for a level index
pub fn coin_spots(index: usize) -> &'static [Vec2] {
    COIN_SPOTS[index % LEVEL_COUNT]
}
