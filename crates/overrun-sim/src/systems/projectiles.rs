//! Projectile flight, expiry, and hit resolution.

use glam::Vec2;

use overrun_core::components::{Enemy, Projectile};
use overrun_core::constants::{DT, PROJECTILE_HIT_RADIUS};
use overrun_core::enums::{EnemyKind, HitPolicy, ProjectileKind};
use overrun_core::events::SimEvent;
use overrun_core::types::SimTime;
use overrun_pool::{Handle, Pool};

use crate::player::Player;
use crate::registry::{EnemyHandle, EnemyRegistry};
use crate::systems::enemies::damage_enemy;

/// Advance every active projectile, releasing expired ones and resolving
/// the first enemy overlap per the projectile's hit policy. A projectile is
/// consumed by its first hit regardless of policy.
#[allow(clippy::too_many_arguments)]
pub fn run(
    projectile_pool: &mut Pool<ProjectileKind, Projectile>,
    enemy_pool: &mut Pool<EnemyKind, Enemy>,
    registry: &mut EnemyRegistry,
    player: &mut Player,
    time: &SimTime,
    events: &mut Vec<SimEvent>,
    score: &mut i32,
    buffer: &mut Vec<Handle<ProjectileKind>>,
) {
    let now = time.tick;
    // Snapshot of the live set at the start of the pass. Enemies killed by
    // an earlier projectile stay in it; damage_enemy no-ops on them.
    let live: Vec<EnemyHandle> = registry.handles().to_vec();
    projectile_pool.collect_active_into(buffer);

    for &handle in buffer.iter() {
        let (position, kind, id, damage, policy, expired) = {
            let Some(projectile) = projectile_pool.get_mut(handle) else {
                continue;
            };
            projectile.transform.position += projectile.transform.facing * projectile.speed * DT;
            projectile.elapsed_secs += DT;
            (
                projectile.transform.position,
                projectile.kind,
                projectile.id,
                projectile.damage,
                projectile.hit_policy,
                projectile.expired(),
            )
        };

        if expired {
            projectile_pool.release(handle);
            events.push(SimEvent::EntityDeactivated { id });
            continue;
        }

        let Some(struck) = nearest_overlap(enemy_pool, &live, position) else {
            continue;
        };

        events.push(SimEvent::ProjectileHit { id, kind });
        match policy {
            HitPolicy::Single => {
                damage_enemy(
                    enemy_pool, registry, struck, damage, now, events, score, player,
                );
            }
            HitPolicy::Area {
                radius,
                full_damage,
            } => {
                for &enemy_handle in &live {
                    let Some(distance) = distance_to(enemy_pool, enemy_handle, position) else {
                        continue;
                    };
                    if distance > radius {
                        continue;
                    }
                    let amount = if full_damage {
                        damage
                    } else {
                        falloff_damage(damage, distance, radius)
                    };
                    damage_enemy(
                        enemy_pool,
                        registry,
                        enemy_handle,
                        amount,
                        now,
                        events,
                        score,
                        player,
                    );
                }
            }
            HitPolicy::AreaSlow {
                radius,
                slow_percent,
                slow_secs,
            } => {
                // Direct damage to the struck enemy only; the slow hits
                // everything in the radius, the struck enemy included.
                damage_enemy(
                    enemy_pool, registry, struck, damage, now, events, score, player,
                );
                for &enemy_handle in &live {
                    let Some(enemy) = enemy_pool.get_mut(enemy_handle) else {
                        continue;
                    };
                    if enemy.transform.distance_to(position) <= radius {
                        enemy.apply_slow(slow_percent, slow_secs, now);
                    }
                }
            }
        }

        projectile_pool.release(handle);
        events.push(SimEvent::EntityDeactivated { id });
    }
}

/// Closest live enemy within the hit radius of `position`, if any.
fn nearest_overlap(
    enemy_pool: &Pool<EnemyKind, Enemy>,
    live: &[EnemyHandle],
    position: Vec2,
) -> Option<EnemyHandle> {
    let mut best: Option<(EnemyHandle, f32)> = None;
    for &handle in live {
        let Some(distance) = distance_to(enemy_pool, handle, position) else {
            continue;
        };
        if distance > PROJECTILE_HIT_RADIUS {
            continue;
        }
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((handle, distance));
        }
    }
    best.map(|(handle, _)| handle)
}

fn distance_to(
    enemy_pool: &Pool<EnemyKind, Enemy>,
    handle: EnemyHandle,
    position: Vec2,
) -> Option<f32> {
    enemy_pool
        .get(handle)
        .map(|enemy| enemy.transform.distance_to(position))
}

/// Linear falloff from full damage at the impact point to zero at the blast
/// edge, never below zero.
fn falloff_damage(damage: i32, distance: f32, radius: f32) -> i32 {
    let scale = (1.0 - distance / radius).max(0.0);
    (damage as f32 * scale).round() as i32
}
