//! Catch game: steer a basket along the bottom of the play area and catch
//! leaves (common, 10 points) and bricks (rare, 25 points) as they fall.
//!
//! The logic here is UI-agnostic: `tick_catch` takes wall-clock time, the
//! sampled held-input state, and an RNG, and steps the world in fixed 16ms
//! increments. Rendering and input live under `ui` and `input`.

pub mod logic;
pub mod types;

// Re-exports are part of the library API; the binary compiles this module
// tree too but reaches items through their full paths.
#[allow(unused_imports)]
pub use logic::*;
#[allow(unused_imports)]
pub use types::*;
