//! Events emitted by the simulation for presentation (animation, audio, HUD).
//!
//! The core never calls into presentation APIs; it pushes these into a
//! per-tick buffer that is drained into the snapshot, preserving order
//! (death -> registry unregister -> reward grant -> release scheduling).

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, EnemyState, ProjectileKind};

/// Presentation-facing events for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A pooled entity went live (enemy spawn, projectile fired).
    EntityActivated { id: u32 },
    /// A pooled entity returned to its pool.
    EntityDeactivated { id: u32 },
    /// An enemy changed behavior state (drives animation playback).
    EnemyStateChanged { id: u32, state: EnemyState },
    /// An enemy died. Rewards are granted in the same tick, in this order.
    EnemyDied {
        id: u32,
        kind: EnemyKind,
        score_reward: i32,
        exp_reward: i32,
    },
    /// A projectile resolved a hit.
    ProjectileHit { id: u32, kind: ProjectileKind },
    /// A new wave began spawning.
    WaveStarted { wave_number: i32, enemy_count: i32 },
    /// The live registry emptied; the next wave follows immediately.
    WaveCleared { wave_number: i32 },
    /// The player took a hit.
    PlayerDamaged { remaining_health: i32 },
    /// The player crossed an experience threshold. An upgrade choice is
    /// expected to arrive later as an `ApplyUpgrade` command.
    PlayerLeveledUp { level: i32 },
    PlayerDied,
    /// The run ended; the high score has been persisted if beaten.
    GameOver { score: i32, high_score: i32 },
}
