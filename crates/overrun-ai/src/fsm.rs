//! Enemy behavior finite state machine.
//!
//! Pure function that computes state transitions and movement for one enemy
//! based on its distance to the player. The band between attack range and
//! chase range is deliberate hysteresis: an enemy sitting exactly on the
//! attack boundary holds its current state instead of flipping every tick.

use glam::Vec2;

use overrun_core::enums::EnemyState;

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub state: EnemyState,
    pub position: Vec2,
    pub player_pos: Vec2,
    pub player_dead: bool,
    pub move_speed: f32,
    pub attack_range: f32,
    pub chase_range: f32,
    /// Whether the attack cooldown has elapsed.
    pub cooldown_ready: bool,
    /// Frame time in seconds.
    pub dt: f32,
}

/// Output from the enemy FSM.
#[derive(Debug, Clone, Copy)]
pub struct EnemyUpdate {
    pub new_state: EnemyState,
    /// Positional delta to apply this tick.
    pub displacement: Vec2,
    /// Whether the enemy should turn toward the player.
    pub face_player: bool,
    /// Whether to strike the player this tick.
    pub attack: bool,
    /// True only on a genuine transition; gates presentation events.
    pub state_changed: bool,
}

/// Evaluate the FSM for one enemy. Callers skip Dying/Pooled enemies, but
/// the guard is repeated here so the function is safe on any input.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let hold = EnemyUpdate {
        new_state: ctx.state,
        displacement: Vec2::ZERO,
        face_player: false,
        attack: false,
        state_changed: false,
    };

    if matches!(ctx.state, EnemyState::Dying | EnemyState::Pooled) {
        return hold;
    }

    // Player gone: suspend movement and attacks rather than erroring.
    if ctx.player_dead {
        return EnemyUpdate {
            new_state: EnemyState::Idle,
            state_changed: ctx.state != EnemyState::Idle,
            ..hold
        };
    }

    let distance = ctx.position.distance(ctx.player_pos);

    if distance > ctx.chase_range {
        return chase(ctx, distance);
    }

    if distance <= ctx.attack_range && ctx.cooldown_ready {
        return EnemyUpdate {
            new_state: EnemyState::Attacking,
            displacement: Vec2::ZERO,
            face_player: true,
            attack: true,
            state_changed: ctx.state != EnemyState::Attacking,
        };
    }

    // Hysteresis band, or in attack range waiting on cooldown: an attacking
    // enemy holds its ground so it doesn't thrash at the boundary.
    if ctx.state == EnemyState::Attacking {
        return hold;
    }

    // Still closing in; no fresh transition to report while chasing.
    chase(ctx, distance)
}

fn chase(ctx: &EnemyContext, distance: f32) -> EnemyUpdate {
    let direction = if distance > f32::EPSILON {
        (ctx.player_pos - ctx.position) / distance
    } else {
        Vec2::ZERO
    };

    EnemyUpdate {
        new_state: EnemyState::Chasing,
        displacement: direction * ctx.move_speed * ctx.dt,
        face_player: true,
        attack: false,
        state_changed: ctx.state != EnemyState::Chasing,
    }
}
