//! Wave director: detects wave clear, scales the next wave, and spawns it.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use overrun_core::components::Enemy;
use overrun_core::constants::*;
use overrun_core::enums::EnemyKind;
use overrun_core::events::SimEvent;
use overrun_core::persist::ScoreStore;
use overrun_pool::Pool;

use crate::registry::EnemyRegistry;

/// Wave director state. Scaling parameters are carried here rather than
/// read from constants at the call sites so tests can tighten them.
pub struct WaveState {
    pub wave_number: i32,
    pub base_enemy_count: i32,
    pub count_increase_per_wave: i32,
    pub base_heavy_chance: f32,
    pub heavy_chance_increase_per_wave: f32,
    pub spawn_radius: f32,
    /// False until the first wave of a run has spawned.
    pub in_progress: bool,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            wave_number: 1,
            base_enemy_count: WAVE_BASE_ENEMY_COUNT,
            count_increase_per_wave: WAVE_COUNT_INCREASE,
            base_heavy_chance: WAVE_BASE_HEAVY_CHANCE,
            heavy_chance_increase_per_wave: WAVE_HEAVY_CHANCE_INCREASE,
            spawn_radius: SPAWN_RADIUS,
            in_progress: false,
        }
    }
}

impl WaveState {
    /// Linear growth: base + increase per wave past the first.
    pub fn enemy_count(&self, wave: i32) -> i32 {
        self.base_enemy_count + (wave - 1) * self.count_increase_per_wave
    }

    /// Heavy spawn probability, clamped to a valid probability.
    pub fn heavy_chance(&self, wave: i32) -> f32 {
        (self.base_heavy_chance + (wave - 1) as f32 * self.heavy_chance_increase_per_wave)
            .clamp(0.0, 1.0)
    }
}

/// Wave-clear check, run before any other system each tick. When the live
/// registry empties, the wave number advances, is persisted, and the next
/// wave spawns in the same tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    state: &mut WaveState,
    pool: &mut Pool<EnemyKind, Enemy>,
    registry: &mut EnemyRegistry,
    rng: &mut ChaCha8Rng,
    store: &mut dyn ScoreStore,
    player_pos: Vec2,
    events: &mut Vec<SimEvent>,
    next_id: &mut u32,
) {
    if !state.in_progress || !registry.is_empty() {
        return;
    }

    events.push(SimEvent::WaveCleared {
        wave_number: state.wave_number,
    });
    state.wave_number += 1;
    store.set_int(CURRENT_WAVE_KEY, state.wave_number);
    start_wave(state, pool, registry, rng, player_pos, events, next_id);
}

/// Spawn a full wave on a disc around the arena origin. Each slot rolls the
/// heavy chance independently.
pub fn start_wave(
    state: &mut WaveState,
    pool: &mut Pool<EnemyKind, Enemy>,
    registry: &mut EnemyRegistry,
    rng: &mut ChaCha8Rng,
    player_pos: Vec2,
    events: &mut Vec<SimEvent>,
    next_id: &mut u32,
) {
    let wave = state.wave_number;
    let count = state.enemy_count(wave);
    let heavy_chance = state.heavy_chance(wave);

    info!(wave, count, heavy_chance, "wave starting");
    events.push(SimEvent::WaveStarted {
        wave_number: wave,
        enemy_count: count,
    });

    for _ in 0..count {
        // Uniform over the disc, not the circle edge.
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let radius = state.spawn_radius * rng.gen::<f32>().sqrt();
        let position = Vec2::new(radius * angle.cos(), radius * angle.sin());
        let kind = if rng.gen::<f32>() < heavy_chance {
            EnemyKind::Heavy
        } else {
            EnemyKind::Basic
        };

        let handle = match pool.acquire(kind) {
            Ok(handle) => handle,
            Err(err) => {
                warn!(error = %err, "wave spawn dropped");
                continue;
            }
        };

        let id = *next_id;
        *next_id += 1;
        let facing = (player_pos - position).try_normalize().unwrap_or(Vec2::Y);
        if let Some(enemy) = pool.get_mut(handle) {
            enemy.reset(id, position, facing);
        }
        registry.register(handle);
        events.push(SimEvent::EntityActivated { id });
    }

    state.in_progress = true;
}
