//! Catch game logic: input-to-velocity mapping, motion, spawning, and
//! collision scoring.

use super::types::{CatchGame, Faller, FallerKind, Player};
use crate::constants::*;
use rand::Rng;

/// Current held state of the directional controls, sampled once per frame.
/// Supplied by the input layer; the game core never mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldInput {
    pub left: bool,
    pub right: bool,
}

impl HeldInput {
    pub const NONE: HeldInput = HeldInput {
        left: false,
        right: false,
    };
    pub const LEFT: HeldInput = HeldInput {
        left: true,
        right: false,
    };
    pub const RIGHT: HeldInput = HeldInput {
        left: false,
        right: true,
    };
}

/// Advance the game. Called from the main loop with wall-clock `dt_ms`.
///
/// Internally steps the simulation in fixed 16ms increments (~60 FPS).
/// Returns true if any physics step ran.
pub fn tick_catch<R: Rng>(
    game: &mut CatchGame,
    dt_ms: u64,
    held: HeldInput,
    rng: &mut R,
) -> bool {
    // Clamp dt to 100ms max so a stall cannot teleport fallers through the basket
    let dt_ms = dt_ms.min(100);

    game.accumulated_time_ms += dt_ms;
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step_frame(game, held, rng);
        changed = true;
    }

    changed
}

/// Single frame step (16ms of simulated time).
fn step_frame<R: Rng>(game: &mut CatchGame, held: HeldInput, rng: &mut R) {
    game.tick_count += 1;
    let dt = PHYSICS_TICK_MS as f64 / 1000.0;

    // 1. Input to velocity. Left is checked first, right second: when both
    //    directions are held, right wins. Preserved update-order behavior.
    game.player.velocity_x = 0.0;
    if held.left {
        game.player.velocity_x = -PLAYER_SPEED;
    }
    if held.right {
        game.player.velocity_x = PLAYER_SPEED;
    }

    // 2. Integrate the player, clamped to the world bounds
    game.player.x = (game.player.x + game.player.velocity_x * dt).clamp(0.0, PLAY_WIDTH);

    // 3. Advance fallers downward
    for kind in FallerKind::ALL {
        for faller in game.fallers_mut(kind) {
            faller.y += faller.fall_speed * dt;
        }
    }

    // 4. Spawn timer: one faller per interval, remainder carried over
    game.spawn_timer_ms += PHYSICS_TICK_MS;
    while game.spawn_timer_ms >= SPAWN_INTERVAL_MS {
        game.spawn_timer_ms -= SPAWN_INTERVAL_MS;
        game.spawn_faller(rng);
    }

    // 5. Catch overlapping fallers and score them
    score_catches(game);

    // 6. Reclaim fallers that fell past the bottom of the play area
    let cutoff = PLAY_HEIGHT + FALLER_SPRITE_H * SPRITE_SCALE;
    game.leaves.retain(|f| f.y <= cutoff);
    game.bricks.retain(|f| f.y <= cutoff);
}

/// Remove every faller overlapping the basket and add its points to the
/// score. Each faller is scored at most once because removal is immediate;
/// simultaneous overlaps all score in the same frame.
fn score_catches(game: &mut CatchGame) {
    let player = game.player.clone();
    let mut gained = 0u32;

    for kind in FallerKind::ALL {
        let points = kind.points();
        game.fallers_mut(kind).retain(|faller| {
            if overlaps(&player, faller) {
                gained += points;
                false
            } else {
                true
            }
        });
    }

    if gained > 0 {
        game.score += gained;
        game.score_label = format!("Score: {}", game.score);
    }
}

/// Axis-aligned overlap between the basket and a faller, using the scaled
/// sprite extents.
pub fn overlaps(player: &Player, faller: &Faller) -> bool {
    (player.x - faller.x).abs() < player.half_width() + faller.half_width()
        && (player.y - faller.y).abs() < player.half_height() + faller.half_height()
}
