//! Per-tick simulation systems, run in a fixed order by the engine:
//! wave director, player, enemies, projectiles, separation, snapshot.

pub mod enemies;
pub mod projectiles;
pub mod separation;
pub mod snapshot;
pub mod upgrades;
pub mod waves;
