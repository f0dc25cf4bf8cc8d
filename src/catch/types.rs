//! Catch game data structures.
//!
//! The play area is an 800x600 world. Leaves and bricks fall from the top
//! edge at a fixed speed; the player steers a basket along the bottom.

use crate::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The two kinds of falling objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallerKind {
    /// Common (70% of spawns), worth 10 points.
    Leaf,
    /// Rare (30% of spawns), worth 25 points.
    Brick,
}

impl FallerKind {
    pub const ALL: [FallerKind; 2] = [FallerKind::Leaf, FallerKind::Brick];

    /// Points awarded when the basket catches this kind.
    pub fn points(&self) -> u32 {
        match self {
            Self::Leaf => LEAF_POINTS,
            Self::Brick => BRICK_POINTS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Leaf => "Leaf",
            Self::Brick => "Brick",
        }
    }
}

/// A single falling object. Its kind is implied by the collection that owns
/// it; every faller lives in exactly one of the two kind collections until
/// it is caught or falls past the bottom.
#[derive(Debug, Clone, Copy)]
pub struct Faller {
    /// Horizontal position (world units from the left edge).
    pub x: f64,
    /// Vertical position (world units from the top edge; increases downward).
    pub y: f64,
    /// Downward speed in units/second. Constant for the faller's lifetime.
    pub fall_speed: f64,
    /// Visual scale applied to the nominal sprite dimensions.
    pub scale: f64,
}

impl Faller {
    pub fn half_width(&self) -> f64 {
        FALLER_SPRITE_W * self.scale / 2.0
    }

    pub fn half_height(&self) -> f64 {
        FALLER_SPRITE_H * self.scale / 2.0
    }
}

/// The player's basket. Created once per session; never destroyed.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    /// Fixed vertical position near the bottom of the play area.
    pub y: f64,
    /// Current horizontal velocity in units/second (set from input each frame).
    pub velocity_x: f64,
    pub scale: f64,
}

impl Player {
    pub fn half_width(&self) -> f64 {
        PLAYER_SPRITE_W * self.scale / 2.0
    }

    pub fn half_height(&self) -> f64 {
        PLAYER_SPRITE_H * self.scale / 2.0
    }
}

/// Full game session state. All mutable state shared between the spawner,
/// the per-frame update, and scoring lives here; callbacks take it by
/// exclusive reference for the duration of one invocation.
#[derive(Debug, Clone)]
pub struct CatchGame {
    pub player: Player,

    // -- Faller collections, partitioned by kind --
    pub leaves: Vec<Faller>,
    pub bricks: Vec<Faller>,

    // -- Scoring --
    /// Running score. Never decreases.
    pub score: u32,
    /// Display string, kept at exactly "Score: <total>".
    pub score_label: String,

    // -- Timing --
    /// Milliseconds accumulated toward the next spawn (fires every 1000ms).
    pub spawn_timer_ms: u64,
    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total physics ticks elapsed.
    pub tick_count: u64,
}

impl CatchGame {
    pub fn new() -> Self {
        Self {
            player: Player {
                x: PLAYER_START_X,
                y: PLAYER_Y,
                velocity_x: 0.0,
                scale: SPRITE_SCALE,
            },
            leaves: Vec::new(),
            bricks: Vec::new(),
            score: 0,
            score_label: "Score: 0".to_string(),
            spawn_timer_ms: 0,
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    pub fn fallers(&self, kind: FallerKind) -> &Vec<Faller> {
        match kind {
            FallerKind::Leaf => &self.leaves,
            FallerKind::Brick => &self.bricks,
        }
    }

    pub fn fallers_mut(&mut self, kind: FallerKind) -> &mut Vec<Faller> {
        match kind {
            FallerKind::Leaf => &mut self.leaves,
            FallerKind::Brick => &mut self.bricks,
        }
    }

    /// Total fallers currently in play, across both kinds.
    pub fn faller_count(&self) -> usize {
        self.leaves.len() + self.bricks.len()
    }

    /// Spawn one faller at the top of the play area: x is a uniform random
    /// integer in [50, 750], kind is leaf with 70% probability. Returns the
    /// kind chosen.
    pub fn spawn_faller<R: Rng>(&mut self, rng: &mut R) -> FallerKind {
        let x = rng.gen_range(SPAWN_X_MIN..=SPAWN_X_MAX) as f64;
        let kind = if rng.gen::<f64>() < LEAF_CHANCE {
            FallerKind::Leaf
        } else {
            FallerKind::Brick
        };

        self.fallers_mut(kind).push(Faller {
            x,
            y: 0.0,
            fall_speed: FALL_SPEED,
            scale: SPRITE_SCALE,
        });
        kind
    }
}

impl Default for CatchGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = CatchGame::new();
        assert!((game.player.x - PLAYER_START_X).abs() < f64::EPSILON);
        assert!((game.player.y - PLAYER_Y).abs() < f64::EPSILON);
        assert!((game.player.velocity_x).abs() < f64::EPSILON);
        assert!(game.leaves.is_empty());
        assert!(game.bricks.is_empty());
        assert_eq!(game.score, 0);
        assert_eq!(game.score_label, "Score: 0");
        assert_eq!(game.spawn_timer_ms, 0);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_kind_points() {
        assert_eq!(FallerKind::Leaf.points(), 10);
        assert_eq!(FallerKind::Brick.points(), 25);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(FallerKind::Leaf.name(), "Leaf");
        assert_eq!(FallerKind::Brick.name(), "Brick");
    }

    #[test]
    fn test_all_kinds() {
        assert_eq!(FallerKind::ALL.len(), 2);
    }

    #[test]
    fn test_spawn_faller_initial_state() {
        let mut game = CatchGame::new();
        let mut rng = rand::thread_rng();

        let kind = game.spawn_faller(&mut rng);

        assert_eq!(game.faller_count(), 1);
        let faller = game.fallers(kind)[0];
        assert!((faller.y).abs() < f64::EPSILON, "Fallers spawn at the top");
        assert!((faller.fall_speed - FALL_SPEED).abs() < f64::EPSILON);
        assert!((faller.scale - SPRITE_SCALE).abs() < f64::EPSILON);
        assert!(faller.x >= SPAWN_X_MIN as f64);
        assert!(faller.x <= SPAWN_X_MAX as f64);
    }

    #[test]
    fn test_spawn_faller_partitions_by_kind() {
        let mut game = CatchGame::new();
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            game.spawn_faller(&mut rng);
        }

        // Every spawn landed in exactly one collection.
        assert_eq!(game.leaves.len() + game.bricks.len(), 50);
    }

    #[test]
    fn test_half_extents_respect_scale() {
        let game = CatchGame::new();
        assert!((game.player.half_width() - PLAYER_SPRITE_W * SPRITE_SCALE / 2.0).abs() < f64::EPSILON);
        assert!((game.player.half_height() - PLAYER_SPRITE_H * SPRITE_SCALE / 2.0).abs() < f64::EPSILON);

        let faller = Faller {
            x: 0.0,
            y: 0.0,
            fall_speed: FALL_SPEED,
            scale: 1.0,
        };
        assert!((faller.half_width() - FALLER_SPRITE_W / 2.0).abs() < f64::EPSILON);
    }
}
