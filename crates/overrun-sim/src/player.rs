//! Player state, movement, firing and progression.

use glam::Vec2;
use tracing::warn;

use overrun_core::components::{Damageable, Projectile};
use overrun_core::constants::*;
use overrun_core::enums::ProjectileKind;
use overrun_core::events::SimEvent;
use overrun_pool::Pool;

use crate::engine::InputState;
use crate::prototypes::Prototypes;

pub struct Player {
    pub position: Vec2,
    pub facing: Vec2,
    pub max_health: i32,
    pub current_health: i32,
    pub level: i32,
    pub experience: i32,
    pub experience_to_next_level: i32,
    pub move_speed: f32,
    pub fire_interval_secs: f32,
    /// Seconds since the last shot; counts up every tick.
    pub fire_timer_secs: f32,
    pub selected_projectile: ProjectileKind,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            facing: Vec2::Y,
            max_health: PLAYER_MAX_HEALTH,
            current_health: PLAYER_MAX_HEALTH,
            level: 1,
            experience: 0,
            experience_to_next_level: PLAYER_BASE_EXP_TO_LEVEL,
            move_speed: PLAYER_MOVE_SPEED,
            fire_interval_secs: PLAYER_FIRE_INTERVAL_SECS,
            fire_timer_secs: 0.0,
            selected_projectile: ProjectileKind::Standard,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore baseline stats for a fresh run. Upgrades do not carry over.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Grant experience, levelling up when the threshold is crossed. A
    /// level-up refills health and raises the next threshold.
    pub fn gain_exp(&mut self, amount: i32, events: &mut Vec<SimEvent>) {
        self.experience += amount;
        if self.experience >= self.experience_to_next_level {
            self.level += 1;
            self.experience = 0;
            self.experience_to_next_level += PLAYER_EXP_STEP_PER_LEVEL;
            self.current_health = self.max_health;
            events.push(SimEvent::PlayerLeveledUp { level: self.level });
        }
    }
}

impl Damageable for Player {
    fn take_damage(&mut self, amount: i32) -> i32 {
        self.current_health = (self.current_health - amount).max(0);
        self.current_health
    }

    fn is_dead(&self) -> bool {
        self.current_health <= 0
    }
}

/// Per-tick player update: apply held movement input, advance the fire
/// timer, and fire while the trigger is held and the interval has elapsed.
pub fn run(
    player: &mut Player,
    input: &InputState,
    projectile_pool: &mut Pool<ProjectileKind, Projectile>,
    prototypes: &Prototypes,
    events: &mut Vec<SimEvent>,
    next_id: &mut u32,
) {
    if player.is_dead() {
        return;
    }

    if input.move_dir.length_squared() > f32::EPSILON {
        player.position += input.move_dir * player.move_speed * DT;
        player.facing = input.move_dir.normalize();
    }

    player.fire_timer_secs += DT;
    if input.firing && player.fire_timer_secs >= player.fire_interval_secs {
        fire(player, projectile_pool, prototypes, events, next_id);
        player.fire_timer_secs = 0.0;
    }
}

fn fire(
    player: &Player,
    projectile_pool: &mut Pool<ProjectileKind, Projectile>,
    prototypes: &Prototypes,
    events: &mut Vec<SimEvent>,
    next_id: &mut u32,
) {
    let kind = player.selected_projectile;
    let handle = match projectile_pool.acquire(kind) {
        Ok(handle) => handle,
        Err(err) => {
            warn!(error = %err, "shot dropped");
            return;
        }
    };

    let id = *next_id;
    *next_id += 1;

    let muzzle = player.position + player.facing * FIRE_SPAWN_OFFSET;
    if let Some(projectile) = projectile_pool.get_mut(handle) {
        projectile.reset(id, muzzle, player.facing, prototypes.get(kind));
    }
    events.push(SimEvent::EntityActivated { id });
}
