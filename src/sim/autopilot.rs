//! Demo-mode AI
//!
//! Holds the player just above the lower brick of the next pipe pair so each
//! flap's shot knocks that brick out, and restarts immediately after a crash.

use super::physics::Physics;
use super::state::{GamePhase, GameState, PipePiece};
use super::tick::TickInput;
use crate::consts::*;

/// Hover line relative to the gap: low enough that flap shots hit the lower
/// brick, high enough to clear the bottom cap
const HOVER_BELOW_GAP: f32 = 110.0;

/// Decide this tick's input
pub fn autopilot_input(state: &GameState, physics: &impl Physics) -> TickInput {
    if state.session.phase != GamePhase::Playing {
        return TickInput { activate: true };
    }

    let player = state.player.handle;
    let (Some(pos), Some(vel)) = (physics.position(player), physics.velocity(player)) else {
        return TickInput::default();
    };

    let target = next_gap(state, physics, pos.x)
        .map(|gap| gap + HOVER_BELOW_GAP)
        .unwrap_or_else(|| state.tuning.center_y());

    TickInput {
        activate: pos.y > target && vel.y > 0.0,
    }
}

/// Gap line of the nearest pipe pair the player has not yet cleared
fn next_gap(state: &GameState, physics: &impl Physics, player_x: f32) -> Option<f32> {
    let tail = player_x - PLAYER_SIZE.x / 2.0;
    state
        .pipes
        .iter()
        .filter(|p| p.piece == PipePiece::TopCap)
        .filter_map(|p| physics.position(p.handle))
        .filter(|cap| cap.x + CAP_SIZE.x > tail)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|cap| cap.y)
}
