//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;

/// World-space placement on the play plane: position plus unit facing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2 {
    pub position: Vec2,
    /// Unit vector the entity is looking along.
    pub facing: Vec2,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            facing: Vec2::Y,
        }
    }
}

impl Transform2 {
    pub fn new(position: Vec2, facing: Vec2) -> Self {
        Self { position, facing }
    }

    /// Turn to look at a world point. No-op when the point coincides with
    /// the current position.
    pub fn face_toward(&mut self, target: Vec2) {
        let delta = target - self.position;
        if delta.length_squared() > f32::EPSILON {
            self.facing = delta.normalize();
        }
    }

    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.position.distance(point)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Convert a duration in seconds to a whole number of ticks, rounding up so
/// deadlines never fire early.
pub fn secs_to_ticks(secs: f32) -> u64 {
    (secs * TICK_RATE as f32).ceil() as u64
}
