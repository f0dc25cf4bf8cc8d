//! Windfall - Terminal Arcade Catcher Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod catch;
pub mod config;
pub mod constants;
pub mod input;

pub use catch::{tick_catch, CatchGame, Faller, FallerKind, HeldInput, Player};
pub use config::GameConfig;
pub use constants::*;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
