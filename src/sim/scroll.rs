//! Scroll and cleanup
//!
//! Pipes that scroll past the removal line are destroyed and each piece
//! credits `pipe_credit` (a full batch of four pieces is worth one point).

use super::physics::Physics;
use super::state::GameState;
use crate::consts::BACKGROUND_SCROLL_RATE;

/// Cosmetic background scroll
pub fn scroll_background(state: &mut GameState, dt: f32) {
    state.background_offset -= BACKGROUND_SCROLL_RATE * dt;
}

/// Remove pipes left of the removal line, crediting each piece once.
///
/// Returns the number of pieces credited.
pub fn cleanup_pipes(state: &mut GameState, physics: &mut impl Physics) -> usize {
    let threshold = state.tuning.removal_x;
    let mut credited = 0;

    state.pipes.retain_mut(|pipe| {
        let gone = physics
            .position(pipe.handle)
            .is_some_and(|p| p.x < threshold);
        if gone && !pipe.passed {
            pipe.passed = true;
            physics.destroy_entity(pipe.handle);
            credited += 1;
        }
        !gone
    });

    let credit = state.tuning.pipe_credit;
    for _ in 0..credited {
        state.add_score(credit);
    }
    credited
}

/// Drop bricks that scrolled away unshot (no credit)
pub fn cleanup_bricks(state: &mut GameState, physics: &mut impl Physics) {
    let threshold = state.tuning.removal_x;
    state.bricks.retain(|brick| {
        let gone = physics
            .position(brick.handle)
            .is_some_and(|p| p.x < threshold);
        if gone {
            physics.destroy_entity(brick.handle);
        }
        !gone
    });
}

/// Age explosions and remove finished ones
pub fn expire_explosions(state: &mut GameState, physics: &mut impl Physics, dt: f32) {
    let dt_ms = dt * 1000.0;
    state.explosions.retain_mut(|fx| {
        fx.ttl_ms -= dt_ms;
        let done = fx.ttl_ms <= 0.0;
        if done {
            physics.destroy_entity(fx.handle);
        }
        !done
    });
}
