//! Archetype-specific stat profiles.
//!
//! Consolidates per-archetype parameters and builds the pool template
//! instance for each enemy kind.

use overrun_core::components::Enemy;
use overrun_core::enums::{EnemyKind, EnemyState};
use overrun_core::types::Transform2;

/// Stat block for an enemy archetype.
pub struct EnemyProfile {
    pub max_health: i32,
    pub damage: i32,
    pub move_speed: f32,
    pub exp_reward: i32,
    pub score_reward: i32,
    pub attack_cooldown_secs: f32,
    pub attack_range: f32,
    pub chase_range: f32,
}

/// Get the stat profile for a given archetype.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    use overrun_core::constants::*;

    match kind {
        EnemyKind::Basic => EnemyProfile {
            max_health: BASIC_MAX_HEALTH,
            damage: BASIC_DAMAGE,
            move_speed: BASIC_MOVE_SPEED,
            exp_reward: BASIC_EXP_REWARD,
            score_reward: BASIC_SCORE_REWARD,
            attack_cooldown_secs: ENEMY_ATTACK_COOLDOWN_SECS,
            attack_range: ENEMY_ATTACK_RANGE,
            chase_range: ENEMY_CHASE_RANGE,
        },
        EnemyKind::Heavy => EnemyProfile {
            max_health: HEAVY_MAX_HEALTH,
            damage: HEAVY_DAMAGE,
            move_speed: HEAVY_MOVE_SPEED,
            exp_reward: HEAVY_EXP_REWARD,
            score_reward: HEAVY_SCORE_REWARD,
            attack_cooldown_secs: ENEMY_ATTACK_COOLDOWN_SECS,
            attack_range: ENEMY_ATTACK_RANGE,
            chase_range: ENEMY_CHASE_RANGE,
        },
    }
}

/// Build an inactive pool-slot enemy for an archetype. Activation happens
/// later through `Enemy::reset` at the spawn point.
pub fn spawn_template(kind: EnemyKind) -> Enemy {
    let profile = get_profile(kind);
    Enemy {
        kind,
        id: 0,
        transform: Transform2::default(),
        max_health: profile.max_health,
        current_health: profile.max_health,
        damage: profile.damage,
        move_speed: profile.move_speed,
        original_move_speed: profile.move_speed,
        exp_reward: profile.exp_reward,
        score_reward: profile.score_reward,
        state: EnemyState::Pooled,
        last_attack_tick: None,
        attack_cooldown_secs: profile.attack_cooldown_secs,
        attack_range: profile.attack_range,
        chase_range: profile.chase_range,
        slow_until_tick: None,
        release_at_tick: None,
    }
}
