//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so nothing
//! mutates the pools or registry mid-tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{ProjectileKind, UpgradeKind};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Game flow ---
    /// Start a run (or restart after game over). The starting wave number
    /// is loaded from the persistence collaborator.
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,

    // --- Input intent ---
    /// Normalized movement direction; zero means standing still.
    SetMoveDirection { direction: Vec2 },
    /// Hold or release the fire trigger.
    SetFiring { firing: bool },
    /// Switch the equipped projectile type.
    SelectProjectile { kind: ProjectileKind },

    // --- Progression ---
    /// Apply a level-up stat upgrade. Mutates the prototype and propagates
    /// through every pooled instance of the affected type.
    ApplyUpgrade { kind: UpgradeKind, value: f32 },
}
