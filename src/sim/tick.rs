//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically. Order per
//! tick: input, spawn timer, physics step, tilt and scroll, player collisions,
//! projectile hits, cleanup.

use super::physics::Physics;
use super::state::{GamePhase, GameState};
use super::{collision, scroll, session, spawner};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap + shoot (and start the run when idle)
    pub activate: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, physics: &mut impl Physics, input: &TickInput, dt: f32) {
    if input.activate {
        session::activate(state, physics);
    }

    let dt_ms = f64::from(dt) * 1000.0;

    // Spawn timer fires between ticks, before anything moves
    if state.session.phase == GamePhase::Playing {
        state.session.elapsed_ms += dt_ms;
        let batches = state.spawn_timer.advance(dt_ms);
        for _ in 0..batches {
            spawner::spawn_batch(state, physics);
        }
    }

    physics.step(dt);
    state.time_ms += dt_ms;
    state.time_ticks += 1;

    scroll::scroll_background(state, dt);
    session::update_tilt(state, dt);

    if state.session.phase == GamePhase::Playing && collision::check_player(state, physics) {
        session::game_over(state, physics);
    }

    collision::resolve_projectiles(state, physics);

    scroll::cleanup_pipes(state, physics);
    scroll::cleanup_bricks(state, physics);
    let (width, height) = (state.tuning.world_width, state.tuning.world_height);
    state.weapon.kill_out_of_bounds(physics, width, height);
    scroll::expire_explosions(state, physics, dt);
}
