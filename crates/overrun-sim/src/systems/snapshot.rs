//! Snapshot assembly: the visible state handed out after each tick.

use overrun_core::components::{Damageable, Enemy, Projectile};
use overrun_core::enums::{EnemyKind, GamePhase, ProjectileKind};
use overrun_core::events::SimEvent;
use overrun_core::state::{EnemyView, GameSnapshot, PlayerView, ProjectileView, WaveView};
use overrun_core::types::SimTime;
use overrun_pool::Pool;

use crate::player::Player;
use crate::systems::waves::WaveState;

#[allow(clippy::too_many_arguments)]
pub fn build(
    time: &SimTime,
    phase: GamePhase,
    wave: &WaveState,
    enemies_remaining: usize,
    score: i32,
    player: &Player,
    enemy_pool: &Pool<EnemyKind, Enemy>,
    projectile_pool: &Pool<ProjectileKind, Projectile>,
    events: Vec<SimEvent>,
) -> GameSnapshot {
    let mut enemy_handles = Vec::new();
    enemy_pool.collect_active_into(&mut enemy_handles);
    let enemies = enemy_handles
        .iter()
        .filter_map(|&handle| enemy_pool.get(handle))
        .map(|enemy| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            position: enemy.transform.position,
            facing: enemy.transform.facing,
            state: enemy.state,
            health: enemy.current_health,
            max_health: enemy.max_health,
        })
        .collect();

    let mut projectile_handles = Vec::new();
    projectile_pool.collect_active_into(&mut projectile_handles);
    let projectiles = projectile_handles
        .iter()
        .filter_map(|&handle| projectile_pool.get(handle))
        .map(|projectile| ProjectileView {
            id: projectile.id,
            kind: projectile.kind,
            position: projectile.transform.position,
            direction: projectile.transform.facing,
        })
        .collect();

    GameSnapshot {
        time: *time,
        phase,
        wave: WaveView {
            wave_number: wave.wave_number,
            enemies_remaining,
        },
        score,
        player: PlayerView {
            position: player.position,
            facing: player.facing,
            health: player.current_health,
            max_health: player.max_health,
            level: player.level,
            experience: player.experience,
            experience_to_next_level: player.experience_to_next_level,
            dead: player.is_dead(),
        },
        enemies,
        projectiles,
        events,
    }
}
