use glam::Vec2;

use overrun_core::constants::*;
use overrun_core::enums::EnemyState;

use crate::fsm::{evaluate, EnemyContext};
use crate::profiles::{get_profile, spawn_template};

fn make_context(state: EnemyState, distance: f32, cooldown_ready: bool) -> EnemyContext {
    EnemyContext {
        state,
        position: Vec2::new(distance, 0.0),
        player_pos: Vec2::ZERO,
        player_dead: false,
        move_speed: BASIC_MOVE_SPEED,
        attack_range: ENEMY_ATTACK_RANGE,
        chase_range: ENEMY_CHASE_RANGE,
        cooldown_ready,
        dt: DT,
    }
}

#[test]
fn far_enemy_chases_toward_player() {
    let ctx = make_context(EnemyState::Idle, 10.0, true);
    let update = evaluate(&ctx);
    assert_eq!(update.new_state, EnemyState::Chasing);
    assert!(update.state_changed);
    assert!(!update.attack);
    // Moving along -X toward the player at move_speed * dt.
    assert!(update.displacement.x < 0.0);
    assert!((update.displacement.length() - BASIC_MOVE_SPEED * DT).abs() < 1e-5);
}

#[test]
fn in_range_with_cooldown_ready_attacks() {
    let ctx = make_context(EnemyState::Chasing, ENEMY_ATTACK_RANGE, true);
    let update = evaluate(&ctx);
    assert_eq!(update.new_state, EnemyState::Attacking);
    assert!(update.attack);
    assert!(update.state_changed);
    assert_eq!(update.displacement, Vec2::ZERO);
}

#[test]
fn attacking_enemy_holds_state_at_the_boundary() {
    // Exactly at attack range, cooldown not yet expired: must stay
    // Attacking, not oscillate back to Chasing.
    let ctx = make_context(EnemyState::Attacking, ENEMY_ATTACK_RANGE, false);
    let update = evaluate(&ctx);
    assert_eq!(update.new_state, EnemyState::Attacking);
    assert!(!update.state_changed);
    assert!(!update.attack);
    assert_eq!(update.displacement, Vec2::ZERO);
}

#[test]
fn attacking_enemy_holds_inside_hysteresis_band() {
    let band_distance = (ENEMY_ATTACK_RANGE + ENEMY_CHASE_RANGE) / 2.0;
    let ctx = make_context(EnemyState::Attacking, band_distance, true);
    let update = evaluate(&ctx);
    assert_eq!(update.new_state, EnemyState::Attacking);
    assert!(!update.state_changed);
    assert_eq!(update.displacement, Vec2::ZERO);
}

#[test]
fn chasing_enemy_keeps_closing_through_the_band() {
    // In the band but not attacking yet: keep moving, and report no fresh
    // transition since the behavior is still the chase.
    let band_distance = (ENEMY_ATTACK_RANGE + ENEMY_CHASE_RANGE) / 2.0;
    let ctx = make_context(EnemyState::Chasing, band_distance, true);
    let update = evaluate(&ctx);
    assert_eq!(update.new_state, EnemyState::Chasing);
    assert!(!update.state_changed);
    assert!(update.displacement.length() > 0.0);
}

#[test]
fn dead_player_forces_idle() {
    let mut ctx = make_context(EnemyState::Chasing, 1.0, true);
    ctx.player_dead = true;
    let update = evaluate(&ctx);
    assert_eq!(update.new_state, EnemyState::Idle);
    assert!(update.state_changed);
    assert!(!update.attack);
    assert_eq!(update.displacement, Vec2::ZERO);
}

#[test]
fn dying_enemy_is_inert() {
    let ctx = make_context(EnemyState::Dying, 1.0, true);
    let update = evaluate(&ctx);
    assert_eq!(update.new_state, EnemyState::Dying);
    assert!(!update.state_changed);
    assert!(!update.attack);
}

#[test]
fn profiles_match_archetype_stats() {
    let basic = get_profile(overrun_core::enums::EnemyKind::Basic);
    assert_eq!(basic.max_health, BASIC_MAX_HEALTH);
    assert_eq!(basic.move_speed, BASIC_MOVE_SPEED);

    let heavy = get_profile(overrun_core::enums::EnemyKind::Heavy);
    assert_eq!(heavy.max_health, HEAVY_MAX_HEALTH);
    assert!(heavy.move_speed < basic.move_speed);
    assert!(heavy.damage > basic.damage);

    // Hysteresis precondition baked into every profile.
    assert!(basic.chase_range > basic.attack_range);
    assert!(heavy.chase_range > heavy.attack_range);
}

#[test]
fn spawn_template_starts_pooled_and_neutral() {
    let enemy = spawn_template(overrun_core::enums::EnemyKind::Heavy);
    assert_eq!(enemy.state, EnemyState::Pooled);
    assert_eq!(enemy.current_health, enemy.max_health);
    assert_eq!(enemy.move_speed, enemy.original_move_speed);
    assert!(enemy.slow_until_tick.is_none());
    assert!(enemy.release_at_tick.is_none());
}
