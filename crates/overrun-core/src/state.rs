//! Game state snapshot: the visible state handed to the frontend each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, EnemyState, GamePhase, ProjectileKind};
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete visible state after one tick, plus the events that occurred
/// during it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub score: i32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub wave_number: i32,
    /// Enemies still alive in the current wave.
    pub enemies_remaining: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub facing: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub level: i32,
    pub experience: i32,
    pub experience_to_next_level: i32,
    pub dead: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub facing: Vec2,
    pub state: EnemyState,
    pub health: i32,
    pub max_health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub kind: ProjectileKind,
    pub position: Vec2,
    pub direction: Vec2,
}
