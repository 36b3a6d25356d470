//! The simulation engine: command queue, system scheduler, snapshot source.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use overrun_core::commands::PlayerCommand;
use overrun_core::components::{Damageable, Enemy, Projectile};
use overrun_core::constants::*;
use overrun_core::enums::{EnemyKind, GamePhase, ProjectileKind};
use overrun_core::events::SimEvent;
use overrun_core::persist::{MemoryStore, ScoreStore};
use overrun_core::state::GameSnapshot;
use overrun_core::types::SimTime;
use overrun_pool::{Handle, Pool};

use overrun_ai::profiles::spawn_template;

use crate::player::{self, Player};
use crate::prototypes::Prototypes;
use crate::registry::EnemyRegistry;
use crate::systems;
use crate::systems::waves::WaveState;

/// Engine construction parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed; identical seeds and command streams replay identically.
    pub seed: u64,
}

/// Held input intent, applied every tick until replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub move_dir: Vec2,
    pub firing: bool,
}

/// The headless simulation. Single-threaded by construction: commands are
/// queued from outside and everything else happens inside `tick`.
pub struct GameEngine {
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,

    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,

    enemy_pool: Pool<EnemyKind, Enemy>,
    projectile_pool: Pool<ProjectileKind, Projectile>,
    registry: EnemyRegistry,
    prototypes: Prototypes,
    wave: WaveState,
    player: Player,
    input: InputState,

    score: i32,
    store: Box<dyn ScoreStore>,
    next_entity_id: u32,

    // Reused each tick to keep the hot path allocation-free.
    enemy_buffer: Vec<Handle<EnemyKind>>,
    projectile_buffer: Vec<Handle<ProjectileKind>>,
}

impl GameEngine {
    pub fn new(config: SimConfig) -> Self {
        Self::with_store(config, Box::new(MemoryStore::new()))
    }

    /// Build an engine over an embedder-supplied persistence store.
    pub fn with_store(config: SimConfig, store: Box<dyn ScoreStore>) -> Self {
        let mut enemy_pool = Pool::new();
        enemy_pool.register(EnemyKind::Basic, BASIC_ENEMY_POOL_INITIAL, || {
            spawn_template(EnemyKind::Basic)
        });
        enemy_pool.register(EnemyKind::Heavy, HEAVY_ENEMY_POOL_INITIAL, || {
            spawn_template(EnemyKind::Heavy)
        });

        let prototypes = Prototypes::new();
        let mut projectile_pool = Pool::new();
        for kind in ProjectileKind::ALL {
            let proto = *prototypes.get(kind);
            let initial = match kind {
                ProjectileKind::Standard => STANDARD_POOL_INITIAL,
                _ => SPECIAL_POOL_INITIAL,
            };
            projectile_pool.register(kind, initial, move || Projectile::from_proto(kind, &proto));
        }

        Self {
            time: SimTime::default(),
            phase: GamePhase::MainMenu,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            enemy_pool,
            projectile_pool,
            registry: EnemyRegistry::new(),
            prototypes,
            wave: WaveState::default(),
            player: Player::new(),
            input: InputState::default(),
            score: 0,
            store,
            next_entity_id: 1,
            enemy_buffer: Vec::new(),
            projectile_buffer: Vec::new(),
        }
    }

    /// Queue a command for the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation one fixed step and return the visible state.
    /// Paused and menu phases still drain commands and produce a snapshot;
    /// they just skip the systems.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.time,
            self.phase,
            &self.wave,
            self.registry.len(),
            self.score,
            &self.player,
            &self.enemy_pool,
            &self.projectile_pool,
            events,
        )
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_run();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetMoveDirection { direction } => {
                // Clamp to the unit disc so speed is bounded by move_speed.
                self.input.move_dir = if direction.length_squared() > 1.0 {
                    direction.normalize()
                } else {
                    direction
                };
            }
            PlayerCommand::SetFiring { firing } => {
                self.input.firing = firing;
            }
            PlayerCommand::SelectProjectile { kind } => {
                self.player.selected_projectile = kind;
            }
            PlayerCommand::ApplyUpgrade { kind, value } => {
                systems::upgrades::apply(
                    kind,
                    value,
                    &mut self.prototypes,
                    &mut self.projectile_pool,
                    &mut self.player,
                );
            }
        }
    }

    /// Reset run state and spawn the opening wave. The starting wave number
    /// comes from the persistence store, so a run resumes at the wave the
    /// previous one reached.
    fn start_run(&mut self) {
        self.enemy_pool.collect_active_into(&mut self.enemy_buffer);
        for i in 0..self.enemy_buffer.len() {
            self.enemy_pool.release(self.enemy_buffer[i]);
        }
        self.projectile_pool
            .collect_active_into(&mut self.projectile_buffer);
        for i in 0..self.projectile_buffer.len() {
            self.projectile_pool.release(self.projectile_buffer[i]);
        }
        self.registry.clear();

        self.player.reset();
        self.prototypes = Prototypes::new();
        self.input = InputState::default();
        self.score = 0;
        self.time = SimTime::default();
        self.wave = WaveState {
            wave_number: self.store.get_int(CURRENT_WAVE_KEY, 1),
            ..WaveState::default()
        };

        info!(wave = self.wave.wave_number, "starting run");
        systems::waves::start_wave(
            &mut self.wave,
            &mut self.enemy_pool,
            &mut self.registry,
            &mut self.rng,
            self.player.position,
            &mut self.events,
            &mut self.next_entity_id,
        );
        self.phase = GamePhase::Active;
    }

    fn run_systems(&mut self) {
        systems::waves::run(
            &mut self.wave,
            &mut self.enemy_pool,
            &mut self.registry,
            &mut self.rng,
            &mut *self.store,
            self.player.position,
            &mut self.events,
            &mut self.next_entity_id,
        );
        player::run(
            &mut self.player,
            &self.input,
            &mut self.projectile_pool,
            &self.prototypes,
            &mut self.events,
            &mut self.next_entity_id,
        );
        systems::enemies::run(
            &mut self.enemy_pool,
            &mut self.player,
            &self.time,
            &mut self.events,
            &mut self.enemy_buffer,
        );
        systems::projectiles::run(
            &mut self.projectile_pool,
            &mut self.enemy_pool,
            &mut self.registry,
            &mut self.player,
            &self.time,
            &mut self.events,
            &mut self.score,
            &mut self.projectile_buffer,
        );
        systems::separation::run(&mut self.enemy_pool, &self.registry);
        self.check_game_over();
    }

    /// High score is written only when beaten.
    fn check_game_over(&mut self) {
        if self.phase != GamePhase::Active || !self.player.is_dead() {
            return;
        }
        let mut high_score = self.store.get_int(HIGH_SCORE_KEY, 0);
        if self.score > high_score {
            self.store.set_int(HIGH_SCORE_KEY, self.score);
            high_score = self.score;
        }
        info!(score = self.score, high_score, "game over");
        self.events.push(SimEvent::GameOver {
            score: self.score,
            high_score,
        });
        self.phase = GamePhase::GameOver;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> i32 {
        self.score
    }
}

#[cfg(test)]
impl GameEngine {
    pub(crate) fn enemy_pool(&self) -> &Pool<EnemyKind, Enemy> {
        &self.enemy_pool
    }

    pub(crate) fn enemy_pool_mut(&mut self) -> &mut Pool<EnemyKind, Enemy> {
        &mut self.enemy_pool
    }

    pub(crate) fn projectile_pool(&self) -> &Pool<ProjectileKind, Projectile> {
        &self.projectile_pool
    }

    pub(crate) fn registry(&self) -> &EnemyRegistry {
        &self.registry
    }

    pub(crate) fn player(&self) -> &Player {
        &self.player
    }

    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub(crate) fn store(&self) -> &dyn ScoreStore {
        &*self.store
    }

    pub(crate) fn tick_number(&self) -> u64 {
        self.time.tick
    }

    /// Force the Active phase without spawning a wave, for tests that place
    /// their own enemies.
    pub(crate) fn activate(&mut self) {
        self.phase = GamePhase::Active;
        self.wave.in_progress = false;
    }

    /// Spawn a single enemy at a known position, bypassing the wave
    /// director's randomized placement.
    pub(crate) fn spawn_enemy_at(
        &mut self,
        kind: EnemyKind,
        position: Vec2,
    ) -> Handle<EnemyKind> {
        let handle = self
            .enemy_pool
            .acquire(kind)
            .unwrap_or_else(|e| panic!("spawn failed: {e}"));
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        let facing = (self.player.position - position)
            .try_normalize()
            .unwrap_or(Vec2::Y);
        if let Some(enemy) = self.enemy_pool.get_mut(handle) {
            enemy.reset(id, position, facing);
        }
        self.registry.register(handle);
        self.events.push(SimEvent::EntityActivated { id });
        handle
    }

    /// Run the full death path on an enemy, as a killing projectile would.
    pub(crate) fn kill_enemy(&mut self, handle: Handle<EnemyKind>) {
        systems::enemies::damage_enemy(
            &mut self.enemy_pool,
            &mut self.registry,
            handle,
            i32::MAX / 2,
            self.time.tick,
            &mut self.events,
            &mut self.score,
            &mut self.player,
        );
    }
}
