//! Cosmetic configuration: play-area dimensions, background color, gravity,
//! and the glyphs standing in for the original image assets.
//!
//! None of this affects the game logic; `constants.rs` owns the gameplay
//! numbers. Loadable from a JSON file via `--config`, defaulted otherwise.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Glyphs used by the scene in place of sprite images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSet {
    pub player: char,
    pub leaf: char,
    pub brick: char,
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self {
            player: '█',
            leaf: '*',
            brick: '#',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play area dimensions in world units.
    pub width: f64,
    pub height: f64,
    /// Background color as "#RRGGBB".
    pub background: String,
    /// Downward acceleration parameter of the original engine config.
    /// Cosmetic here: fallers move at a constant speed.
    pub gravity: f64,
    pub sprites: SpriteSet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background: "#110022".to_string(),
            gravity: 200.0,
            sprites: SpriteSet::default(),
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> io::Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> io::Result<Self> {
        serde_json::from_str(data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Background color as RGB components. Falls back to the default dark
    /// violet when the string is not a valid "#RRGGBB".
    pub fn background_rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(&self.background).unwrap_or((0x11, 0x00, 0x22))
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
