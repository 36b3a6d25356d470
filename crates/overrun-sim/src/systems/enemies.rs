//! Enemy per-tick update and the shared damage path.

use overrun_core::components::{Damageable, Enemy};
use overrun_core::constants::DT;
use overrun_core::enums::{EnemyKind, EnemyState};
use overrun_core::events::SimEvent;
use overrun_core::types::SimTime;
use overrun_pool::Pool;

use overrun_ai::fsm::{evaluate, EnemyContext};

use crate::player::Player;
use crate::registry::{EnemyHandle, EnemyRegistry};

/// Advance every active enemy one tick: revert expired slows, release
/// corpses whose death delay has elapsed, and run the behavior FSM for the
/// rest. Strikes damage the player inline, so a later enemy in the same
/// tick already sees the player dead.
pub fn run(
    pool: &mut Pool<EnemyKind, Enemy>,
    player: &mut Player,
    time: &SimTime,
    events: &mut Vec<SimEvent>,
    buffer: &mut Vec<EnemyHandle>,
) {
    let now = time.tick;
    pool.collect_active_into(buffer);

    for &handle in buffer.iter() {
        let mut strike = None;
        let mut state_change = None;
        let mut release = None;

        {
            let Some(enemy) = pool.get_mut(handle) else {
                continue;
            };

            if let Some(deadline) = enemy.slow_until_tick {
                if now >= deadline {
                    enemy.move_speed = enemy.original_move_speed;
                    enemy.slow_until_tick = None;
                }
            }

            if enemy.state == EnemyState::Dying {
                match enemy.release_at_tick {
                    Some(deadline) if now >= deadline => release = Some(enemy.id),
                    _ => {}
                }
            } else {
                let ctx = EnemyContext {
                    state: enemy.state,
                    position: enemy.transform.position,
                    player_pos: player.position,
                    player_dead: player.is_dead(),
                    move_speed: enemy.move_speed,
                    attack_range: enemy.attack_range,
                    chase_range: enemy.chase_range,
                    cooldown_ready: enemy.cooldown_ready(now),
                    dt: DT,
                };
                let update = evaluate(&ctx);

                enemy.transform.position += update.displacement;
                if update.face_player {
                    enemy.transform.face_toward(player.position);
                }
                if update.state_changed {
                    state_change = Some((enemy.id, update.new_state));
                }
                enemy.state = update.new_state;
                if update.attack {
                    enemy.last_attack_tick = Some(now);
                    strike = Some(enemy.damage);
                }
            }
        }

        if let Some(id) = release {
            pool.release(handle);
            events.push(SimEvent::EntityDeactivated { id });
            continue;
        }
        if let Some((id, state)) = state_change {
            events.push(SimEvent::EnemyStateChanged { id, state });
        }
        if let Some(damage) = strike {
            let remaining = player.take_damage(damage);
            events.push(SimEvent::PlayerDamaged {
                remaining_health: remaining,
            });
            if player.is_dead() {
                events.push(SimEvent::PlayerDied);
            }
        }
    }
}

/// Apply damage to one enemy and, if this crosses it into Dying, run the
/// full death sequence: unregister from the live set, emit events, grant
/// rewards, and stamp the delayed pool release. Idempotent on enemies that
/// are already dying or released.
pub fn damage_enemy(
    pool: &mut Pool<EnemyKind, Enemy>,
    registry: &mut EnemyRegistry,
    handle: EnemyHandle,
    amount: i32,
    now_tick: u64,
    events: &mut Vec<SimEvent>,
    score: &mut i32,
    player: &mut Player,
) {
    let died = {
        let Some(enemy) = pool.get_mut(handle) else {
            return;
        };
        if !enemy.take_damage(amount) {
            return;
        }
        (enemy.id, enemy.kind, enemy.score_reward, enemy.exp_reward)
    };

    let (id, kind, score_reward, exp_reward) = died;
    registry.unregister(handle);
    events.push(SimEvent::EnemyStateChanged {
        id,
        state: EnemyState::Dying,
    });
    events.push(SimEvent::EnemyDied {
        id,
        kind,
        score_reward,
        exp_reward,
    });
    *score += score_reward;
    player.gain_exp(exp_reward, events);

    if let Some(enemy) = pool.get_mut(handle) {
        enemy.schedule_release(now_tick);
    }
}
