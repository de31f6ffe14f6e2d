//! Collision resolution between the player and static level geometry
//!
//! One pass per tick, run right after gravity integration. Platforms are
//! visited strictly in table order and resolved one at a time; a later
//! platform's correction may override an earlier one. The level geometry is
//! tuned around that order.

use super::rect::Rect;
use super::state::{Coin, Player};

/// Resolve the player box against every platform, in list order.
///
/// Vertical motion is corrected first for each platform: a falling player
/// snaps onto the top edge and becomes grounded, a rising player bumps its
/// head on the bottom edge. With no vertical motion left to resolve, a player
/// straddling a platform's side edge is pushed back out horizontally.
pub fn resolve_platform_collisions(player: &mut Player, platforms: &[Rect]) {
    player.on_ground = false;
    for platform in platforms {
        if !player.rect.intersects(platform) {
            continue;
        }

        if player.velocity_y > 0.0 {
            // Falling: land on top
            player.rect.set_bottom(platform.top());
            player.velocity_y = 0.0;
            player.on_ground = true;
        } else if player.velocity_y < 0.0 {
            // Rising: head bump on the underside
            player.rect.set_top(platform.bottom());
            player.velocity_y = 0.0;
        }

        // Side push once vertical velocity is zero, including the case where
        // the branch above just zeroed it
        if player.velocity_y == 0.0 {
            if player.rect.right() > platform.left() && player.rect.left() < platform.left() {
                player.rect.set_right(platform.left());
            } else if player.rect.left() < platform.right() && player.rect.right() > platform.right()
            {
                player.rect.set_left(platform.right());
            }
        }
    }
}

/// Mark every still-uncollected coin overlapping the player as collected.
/// Collection is irreversible for the lifetime of the level instance.
pub fn collect_coins(player_rect: &Rect, coins: &mut [Coin]) {
    for coin in coins.iter_mut() {
        if !coin.collected && player_rect.intersects(&coin.rect) {
            coin.collected = true;
        }
    }
}
