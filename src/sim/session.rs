//! Session state machine
//!
//! `Idle → Playing` on the first flap, `Playing → GameOver → Idle` on a fatal
//! hit. Each transition runs its side effects in a fixed order.

use glam::Vec2;

use super::physics::Physics;
use super::state::{GameEvent, GamePhase, GameState, Sound};
use crate::consts::*;

/// Handle one activate gesture (flap + shoot, and start if idle)
pub fn activate(state: &mut GameState, physics: &mut impl Physics) {
    let player = state.player.handle;

    state.events.push(GameEvent::Sound(Sound::Jump));
    state.events.push(GameEvent::CameraShake {
        intensity: SHAKE_INTENSITY,
        duration_ms: SHAKE_MS,
    });
    state.player.angle = FLAP_ANGLE;
    let vx = physics.velocity(player).map_or(0.0, |v| v.x);
    physics.set_velocity(player, Vec2::new(vx, -state.tuning.jump_speed));

    if let Some(origin) = physics.position(player) {
        let now = state.time_ms;
        let tuning = &state.tuning;
        state.weapon.fire(physics, origin, now, tuning);
    }

    if state.session.phase != GamePhase::Playing {
        start_playing(state, physics);
    }
}

/// `Idle → Playing`
pub fn start_playing(state: &mut GameState, physics: &mut impl Physics) {
    state.session.phase = GamePhase::Playing;
    state.session.score = 0.0;
    state.session.elapsed_ms = 0.0;
    state.spawn_timer.start();
    physics.set_gravity(state.player.handle, state.tuning.gravity);

    state.events.push(GameEvent::ScoreChanged { score: 0.0 });
    state.events.push(GameEvent::OverlayFade {
        alpha: 0.0,
        duration_ms: OVERLAY_FADE_MS,
    });
    state.events.push(GameEvent::RunStarted);
    log::info!("Run started (seed {})", state.seed);
}

/// `Playing → GameOver → Idle`
pub fn game_over(state: &mut GameState, physics: &mut impl Physics) {
    let player = state.player.handle;
    state.session.phase = GamePhase::GameOver;

    state.events.push(GameEvent::Sound(Sound::Defeat));
    physics.set_gravity(player, 0.0);
    physics.set_position(player, Vec2::new(PLAYER_X, state.tuning.center_y()));
    physics.set_velocity(player, Vec2::ZERO);
    state.player.angle = 0.0;
    state.player.alive = true;

    state.clear_obstacles(physics);
    state.spawn_timer.stop();
    state.events.push(GameEvent::OverlayFade {
        alpha: 1.0,
        duration_ms: OVERLAY_FADE_MS,
    });

    let score = state.session.score;
    state.events.push(GameEvent::GameOver { score });
    log::info!(
        "Game over: score {} after {:.1}s",
        crate::display_score(score),
        state.session.elapsed_ms / 1000.0
    );

    state.session.phase = GamePhase::Idle;
}

/// Nose-down tilt while playing
pub fn update_tilt(state: &mut GameState, dt: f32) {
    if state.session.phase == GamePhase::Playing {
        state.player.angle = (state.player.angle + TILT_RATE * dt).min(MAX_TILT);
    }
}
