//! Pooled combat entities and the damage-sink seam.
//!
//! These are mostly plain data; the few methods here guard lifecycle
//! invariants that must stay next to the fields (idempotent death,
//! non-stacking slows, reset cancelling pending deadlines). Everything
//! else lives in the sim systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use overrun_pool::Poolable;

use crate::constants::DEATH_RELEASE_DELAY_SECS;
use crate::enums::{EnemyKind, EnemyState, HitPolicy, ProjectileKind};
use crate::types::{secs_to_ticks, Transform2};

/// Anything enemies and projectiles can hurt. Implemented by the player;
/// tests substitute their own sinks.
pub trait Damageable {
    /// Apply damage and return the remaining health.
    fn take_damage(&mut self, amount: i32) -> i32;
    fn is_dead(&self) -> bool;
}

/// A pooled enemy instance. Constructed once per pool slot from its
/// archetype profile; `reset` re-activates it for a new life.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Activation-scoped identifier for presentation events. Reassigned on
    /// every reset.
    pub id: u32,
    pub transform: Transform2,

    pub max_health: i32,
    pub current_health: i32,
    pub damage: i32,
    pub move_speed: f32,
    /// Canonical speed slows revert to. Never modified after construction.
    pub original_move_speed: f32,
    pub exp_reward: i32,
    pub score_reward: i32,

    pub state: EnemyState,
    /// Tick of the last strike; `None` means the enemy may strike at once.
    pub last_attack_tick: Option<u64>,
    pub attack_cooldown_secs: f32,
    pub attack_range: f32,
    pub chase_range: f32,

    /// Pending slow-revert deadline. Replaced wholesale on re-application.
    pub slow_until_tick: Option<u64>,
    /// Pending post-death pool-release deadline.
    pub release_at_tick: Option<u64>,
}

impl Enemy {
    /// Activate a pooled enemy at a spawn point. Restores health and speed,
    /// clears the attack cooldown, and cancels any deadline left over from
    /// the previous life.
    pub fn reset(&mut self, id: u32, position: Vec2, facing: Vec2) {
        self.id = id;
        self.transform = Transform2::new(position, facing);
        self.current_health = self.max_health;
        self.move_speed = self.original_move_speed;
        self.state = EnemyState::Idle;
        self.last_attack_tick = None;
        self.slow_until_tick = None;
        self.release_at_tick = None;
    }

    /// Whether the attack cooldown has elapsed at `now_tick`.
    pub fn cooldown_ready(&self, now_tick: u64) -> bool {
        match self.last_attack_tick {
            None => true,
            Some(last) => now_tick.saturating_sub(last) >= secs_to_ticks(self.attack_cooldown_secs),
        }
    }

    /// Subtract health. No-op once Dying or Pooled. Returns true exactly
    /// once, on the tick the enemy crosses into Dying.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if matches!(self.state, EnemyState::Dying | EnemyState::Pooled) {
            return false;
        }
        self.current_health -= amount;
        if self.current_health <= 0 {
            self.state = EnemyState::Dying;
            return true;
        }
        false
    }

    /// Stamp the post-death release deadline.
    pub fn schedule_release(&mut self, now_tick: u64) {
        self.release_at_tick = Some(now_tick + secs_to_ticks(DEATH_RELEASE_DELAY_SECS));
    }

    /// Slow movement by `percent` for `duration_secs`. Re-application
    /// replaces the pending revert (last writer wins) and never compounds:
    /// the multiplier is always taken from the canonical original speed.
    pub fn apply_slow(&mut self, percent: f32, duration_secs: f32, now_tick: u64) {
        if matches!(self.state, EnemyState::Dying | EnemyState::Pooled) {
            return;
        }
        let factor = (1.0 - percent / 100.0).clamp(0.0, 1.0);
        self.move_speed = self.original_move_speed * factor;
        self.slow_until_tick = Some(now_tick + secs_to_ticks(duration_secs));
    }
}

impl Poolable for Enemy {
    fn on_release(&mut self) {
        self.state = EnemyState::Pooled;
        self.slow_until_tick = None;
        self.release_at_tick = None;
        self.last_attack_tick = None;
    }
}

/// Canonical per-kind projectile stats, used to initialize instances on
/// activation. The upgrade propagator mutates these and then walks the
/// pooled instances to match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileProto {
    pub damage: i32,
    pub speed: f32,
    pub life_secs: f32,
    pub hit_policy: HitPolicy,
}

/// A pooled projectile instance. Stats are embedded per-instance at
/// activation; the facing vector doubles as the flight direction.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub id: u32,
    pub transform: Transform2,

    pub damage: i32,
    pub speed: f32,
    pub life_secs: f32,
    pub elapsed_secs: f32,
    pub hit_policy: HitPolicy,
}

impl Projectile {
    pub fn from_proto(kind: ProjectileKind, proto: &ProjectileProto) -> Self {
        Self {
            kind,
            id: 0,
            transform: Transform2::default(),
            damage: proto.damage,
            speed: proto.speed,
            life_secs: proto.life_secs,
            elapsed_secs: 0.0,
            hit_policy: proto.hit_policy,
        }
    }

    /// Activate at the muzzle with the current prototype stats.
    pub fn reset(&mut self, id: u32, position: Vec2, direction: Vec2, proto: &ProjectileProto) {
        self.id = id;
        self.transform = Transform2::new(position, direction);
        self.damage = proto.damage;
        self.speed = proto.speed;
        self.life_secs = proto.life_secs;
        self.hit_policy = proto.hit_policy;
        self.elapsed_secs = 0.0;
    }

    pub fn expired(&self) -> bool {
        self.elapsed_secs >= self.life_secs
    }
}

impl Poolable for Projectile {
    fn on_release(&mut self) {
        self.elapsed_secs = 0.0;
        self.id = 0;
    }
}
