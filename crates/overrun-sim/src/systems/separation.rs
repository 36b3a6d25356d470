//! Pairwise enemy separation.
//!
//! O(n^2) over the live set, which stays small enough at wave scale. All
//! repulsion is computed against start-of-system positions and applied
//! afterward, so the result does not depend on iteration order.

use glam::Vec2;

use overrun_core::components::Enemy;
use overrun_core::constants::{DT, SEPARATION_FORCE, SEPARATION_RADIUS};
use overrun_core::enums::EnemyKind;
use overrun_pool::Pool;

use crate::registry::EnemyRegistry;

pub fn run(pool: &mut Pool<EnemyKind, Enemy>, registry: &EnemyRegistry) {
    let handles = registry.handles();
    let n = handles.len();
    if n < 2 {
        return;
    }

    let mut positions = Vec::with_capacity(n);
    for &handle in handles {
        positions.push(pool.get(handle).map(|e| e.transform.position));
    }

    let mut pushes = vec![Vec2::ZERO; n];
    for i in 0..n {
        let Some(here) = positions[i] else {
            continue;
        };
        let mut push = Vec2::ZERO;
        for (j, other) in positions.iter().enumerate() {
            if i == j {
                continue;
            }
            let Some(other) = *other else {
                continue;
            };
            let away = here - other;
            let distance = away.length();
            // Repulsion strengthens as the pair closes. Coincident pairs
            // have no defined direction and are skipped.
            if distance > f32::EPSILON && distance < SEPARATION_RADIUS {
                push += away / distance * (SEPARATION_FORCE / distance);
            }
        }
        pushes[i] = push;
    }

    for (i, &handle) in handles.iter().enumerate() {
        if pushes[i] == Vec2::ZERO {
            continue;
        }
        if let Some(enemy) = pool.get_mut(handle) {
            enemy.transform.position += pushes[i] * DT;
        }
    }
}
