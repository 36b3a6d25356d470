//! Simulation engine for OVERRUN.
//!
//! Owns the entity pools, the live-enemy registry, the wave director, and
//! the player, and runs all systems at a fixed tick rate. Completely
//! headless: presentation consumes the per-tick `GameSnapshot` and its
//! event stream.

pub mod engine;
pub mod player;
pub mod prototypes;
pub mod registry;
pub mod systems;

pub use engine::{GameEngine, SimConfig};
