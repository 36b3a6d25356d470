//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Doubles as the pool partition key, so it carries a total
/// order for deterministic partition iteration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EnemyKind {
    #[default]
    Basic,
    Heavy,
}

/// Enemy behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Fresh from reset, or the player is gone.
    #[default]
    Idle,
    /// Closing on the player.
    Chasing,
    /// In strike range; holds position between strikes.
    Attacking,
    /// Health exhausted, waiting out the death-animation delay.
    Dying,
    /// Returned to the pool. Not a simulated state.
    Pooled,
}

/// Projectile archetype. Also a pool partition key.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ProjectileKind {
    #[default]
    Standard,
    Explosive,
    Frozen,
}

impl ProjectileKind {
    pub const ALL: [ProjectileKind; 3] = [
        ProjectileKind::Standard,
        ProjectileKind::Explosive,
        ProjectileKind::Frozen,
    ];
}

/// What a projectile does when it overlaps an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HitPolicy {
    /// Damage the struck enemy only.
    Single,
    /// Damage every enemy within `radius` of the impact point. With
    /// `full_damage` unset, damage falls off linearly with distance.
    Area { radius: f32, full_damage: bool },
    /// Damage the struck enemy and slow every enemy within `radius`.
    AreaSlow {
        radius: f32,
        slow_percent: f32,
        slow_secs: f32,
    },
}

/// Runtime stat upgrade selected on level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeKind {
    /// Projectile damage, prototype and every pooled instance.
    Attack,
    /// Shortens the player's fire interval.
    FireRate,
    /// Player maximum health (refills current health).
    MaxHealth,
    /// Player movement speed.
    MoveSpeed,
    /// Projectile flight speed, prototype and every pooled instance.
    ProjectileSpeed,
    /// Projectile lifetime (effective range), prototype and every instance.
    ProjectileRange,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    GameOver,
}
