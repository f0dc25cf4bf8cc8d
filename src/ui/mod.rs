//! Terminal rendering. Tightly coupled to ratatui; the game logic in
//! `catch` knows nothing about it.

pub mod catch_scene;
pub mod game_common;
