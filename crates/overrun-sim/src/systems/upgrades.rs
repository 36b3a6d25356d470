//! Level-up stat upgrades.
//!
//! Projectile upgrades mutate the prototypes and then walk every pooled
//! instance of each kind, active and inactive, so in-flight projectiles and
//! the next acquisition both carry the new stats.

use tracing::{info, warn};

use overrun_core::components::Projectile;
use overrun_core::constants::PLAYER_MIN_FIRE_INTERVAL_SECS;
use overrun_core::enums::{ProjectileKind, UpgradeKind};
use overrun_pool::Pool;

use crate::player::Player;
use crate::prototypes::Prototypes;

pub fn apply(
    kind: UpgradeKind,
    value: f32,
    prototypes: &mut Prototypes,
    projectile_pool: &mut Pool<ProjectileKind, Projectile>,
    player: &mut Player,
) {
    info!(?kind, value, "applying upgrade");
    match kind {
        UpgradeKind::Attack => {
            let delta = value.round() as i32;
            for projectile_kind in ProjectileKind::ALL {
                prototypes.get_mut(projectile_kind).damage += delta;
                propagate(projectile_pool, projectile_kind, |p| p.damage += delta);
            }
        }
        UpgradeKind::ProjectileSpeed => {
            for projectile_kind in ProjectileKind::ALL {
                prototypes.get_mut(projectile_kind).speed += value;
                propagate(projectile_pool, projectile_kind, |p| p.speed += value);
            }
        }
        UpgradeKind::ProjectileRange => {
            for projectile_kind in ProjectileKind::ALL {
                prototypes.get_mut(projectile_kind).life_secs += value;
                propagate(projectile_pool, projectile_kind, |p| p.life_secs += value);
            }
        }
        UpgradeKind::FireRate => {
            player.fire_interval_secs =
                (player.fire_interval_secs - value).max(PLAYER_MIN_FIRE_INTERVAL_SECS);
        }
        UpgradeKind::MaxHealth => {
            player.max_health += value.round() as i32;
            player.current_health = player.max_health;
        }
        UpgradeKind::MoveSpeed => {
            player.move_speed += value;
        }
    }
}

fn propagate(
    pool: &mut Pool<ProjectileKind, Projectile>,
    kind: ProjectileKind,
    visitor: impl FnMut(&mut Projectile),
) {
    if let Err(err) = pool.for_each_of_type(kind, visitor) {
        warn!(error = %err, "upgrade propagation skipped");
    }
}
