// Game timing constants
pub const PHYSICS_TICK_MS: u64 = 16;

// Play area dimensions (world units, not terminal cells)
pub const PLAY_WIDTH: f64 = 800.0;
pub const PLAY_HEIGHT: f64 = 600.0;

// Player constants
pub const PLAYER_START_X: f64 = 400.0;
pub const PLAYER_Y: f64 = 550.0;
pub const PLAYER_SPEED: f64 = 300.0; // units/second while a direction is held

// Spawner constants
pub const SPAWN_INTERVAL_MS: u64 = 1000;
pub const SPAWN_X_MIN: i64 = 50;
pub const SPAWN_X_MAX: i64 = 750;
pub const LEAF_CHANCE: f64 = 0.7; // remaining 30% are bricks

// Faller constants
pub const FALL_SPEED: f64 = 200.0; // units/second, both kinds
pub const SPRITE_SCALE: f64 = 0.5;

// Scoring
pub const LEAF_POINTS: u32 = 10;
pub const BRICK_POINTS: u32 = 25;

// Nominal sprite dimensions (world units, before the 0.5 visual scale).
// The overlap predicate uses these; the original took them from image files.
pub const PLAYER_SPRITE_W: f64 = 128.0;
pub const PLAYER_SPRITE_H: f64 = 32.0;
pub const FALLER_SPRITE_W: f64 = 64.0;
pub const FALLER_SPRITE_H: f64 = 64.0;
