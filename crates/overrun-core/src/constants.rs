//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Enemy contact ranges ---

/// Range at which an enemy can strike the player (world units).
pub const ENEMY_ATTACK_RANGE: f32 = 2.0;

/// Range at which an enemy keeps running. Slightly larger than the attack
/// range so the band between them damps state oscillation at the boundary.
pub const ENEMY_CHASE_RANGE: f32 = 2.5;

/// Minimum seconds between enemy strikes.
pub const ENEMY_ATTACK_COOLDOWN_SECS: f32 = 1.0;

/// Delay between entering Dying and the pool release, leaving time for a
/// death animation to play externally.
pub const DEATH_RELEASE_DELAY_SECS: f32 = 0.5;

// --- Enemy archetypes ---

pub const BASIC_MAX_HEALTH: i32 = 30;
pub const BASIC_DAMAGE: i32 = 5;
pub const BASIC_MOVE_SPEED: f32 = 3.0;
pub const BASIC_EXP_REWARD: i32 = 20;
pub const BASIC_SCORE_REWARD: i32 = 10;

pub const HEAVY_MAX_HEALTH: i32 = 100;
pub const HEAVY_DAMAGE: i32 = 15;
pub const HEAVY_MOVE_SPEED: f32 = 1.5;
pub const HEAVY_EXP_REWARD: i32 = 50;
pub const HEAVY_SCORE_REWARD: i32 = 25;

// --- Separation ---

/// Minimum spacing between enemies before repulsion kicks in.
pub const SEPARATION_RADIUS: f32 = 1.5;

/// Repulsion strength; divided by pair distance, scaled by dt.
pub const SEPARATION_FORCE: f32 = 3.0;

// --- Waves ---

/// Radius of the spawn disc around the arena origin.
pub const SPAWN_RADIUS: f32 = 10.0;

/// Enemy count for wave 1.
pub const WAVE_BASE_ENEMY_COUNT: i32 = 5;

/// Enemies added per wave after the first.
pub const WAVE_COUNT_INCREASE: i32 = 2;

/// Heavy spawn probability for wave 1.
pub const WAVE_BASE_HEAVY_CHANCE: f32 = 0.1;

/// Heavy probability added per wave, clamped to 1.0 overall.
pub const WAVE_HEAVY_CHANCE_INCREASE: f32 = 0.05;

// --- Projectiles ---

/// Overlap radius for a projectile-enemy hit.
pub const PROJECTILE_HIT_RADIUS: f32 = 0.5;

pub const STANDARD_DAMAGE: i32 = 10;
pub const STANDARD_SPEED: f32 = 15.0;
pub const STANDARD_LIFE_SECS: f32 = 2.0;

pub const EXPLOSIVE_DAMAGE: i32 = 8;
pub const EXPLOSIVE_SPEED: f32 = 12.0;
pub const EXPLOSIVE_LIFE_SECS: f32 = 2.5;
pub const EXPLOSIVE_RADIUS: f32 = 3.0;

pub const FROZEN_DAMAGE: i32 = 6;
pub const FROZEN_SPEED: f32 = 12.0;
pub const FROZEN_LIFE_SECS: f32 = 2.5;
pub const FROZEN_RADIUS: f32 = 2.0;
pub const FROZEN_SLOW_PERCENT: f32 = 50.0;
pub const FROZEN_SLOW_SECS: f32 = 3.0;

// --- Pool sizing ---

pub const STANDARD_POOL_INITIAL: usize = 20;
pub const SPECIAL_POOL_INITIAL: usize = 10;
pub const BASIC_ENEMY_POOL_INITIAL: usize = 20;
pub const HEAVY_ENEMY_POOL_INITIAL: usize = 10;

// --- Player ---

pub const PLAYER_MAX_HEALTH: i32 = 100;
pub const PLAYER_MOVE_SPEED: f32 = 5.0;
pub const PLAYER_FIRE_INTERVAL_SECS: f32 = 0.3;

/// Fire-rate upgrades can never push the interval below this.
pub const PLAYER_MIN_FIRE_INTERVAL_SECS: f32 = 0.05;

pub const PLAYER_BASE_EXP_TO_LEVEL: i32 = 100;

/// Extra experience required per additional level.
pub const PLAYER_EXP_STEP_PER_LEVEL: i32 = 50;

/// Muzzle offset along the facing vector when spawning a projectile.
pub const FIRE_SPAWN_OFFSET: f32 = 0.6;

// --- Persistence keys ---

pub const HIGH_SCORE_KEY: &str = "high_score";
pub const CURRENT_WAVE_KEY: &str = "current_wave";
