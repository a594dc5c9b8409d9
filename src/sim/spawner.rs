//! Obstacle spawner
//!
//! One batch is six bodies: a top tube and cap, a bottom cap and tube, and two
//! bricks narrowing the opening. All share one x and one leftward velocity.
//!
//! ```text
//!   y = 0      ┌──┐ top tube      (height = gap)
//!   y = gap    ├──┤ top cap
//!   gap + 27    ▣   upper brick
//!   gap + 101   ▣   lower brick
//!   gap + 133  ├──┤ bottom cap + bottom tube
//! ```

use glam::Vec2;

use super::physics::{EntityHandle, EntityKind, Physics};
use super::state::{Brick, GameEvent, GameState, Pipe, PipePiece};
use crate::consts::*;

/// What one spawn produced
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnBatch {
    pub gap: i32,
    pub pipes: [EntityHandle; 4],
    pub bricks: [EntityHandle; 2],
}

/// Create one batch of obstacles sliding in from the right edge
pub fn spawn_batch(state: &mut GameState, physics: &mut impl Physics) -> SpawnBatch {
    let gap = state.random_int(state.tuning.gap_min, state.tuning.gap_max);
    let gap_y = gap as f32;
    let height = state.tuning.world_height;
    let opening = gap_y + state.tuning.pipe_space;
    let pipe_x = state.tuning.world_width + PIPE_SPAWN_OFFSET;
    let brick_x = state.tuning.world_width + BRICK_SPAWN_OFFSET;

    // (kind, piece, slide from, slide to)
    let pipe_layout = [
        (EntityKind::Tube { height: gap_y }, PipePiece::TopTube, -gap_y, 0.0),
        (EntityKind::CapDown, PipePiece::TopCap, 0.0, gap_y),
        (EntityKind::Tube { height }, PipePiece::BottomTube, height, opening),
        (EntityKind::CapUp, PipePiece::BottomCap, height, opening),
    ];
    let brick_layout = [
        (0.0, gap_y + BRICK_TOP_OFFSET),
        (height, gap_y + BRICK_TOP_OFFSET + BRICK_SPACING),
    ];

    let velocity = Vec2::new(-state.tuning.speed, 0.0);
    let mut launch = |kind: EntityKind, x: f32, from: f32, to: f32| {
        let handle = physics.create_entity(kind, Vec2::new(x, from));
        physics.tween_y(handle, from, to, SLIDE_IN_MS);
        physics.set_velocity(handle, velocity);
        handle
    };

    let pipes = pipe_layout.map(|(kind, piece, from, to)| {
        let handle = launch(kind, pipe_x, from, to);
        state.pipes.push(Pipe {
            handle,
            piece,
            passed: false,
        });
        handle
    });
    let bricks = brick_layout.map(|(from, to)| {
        let handle = launch(EntityKind::Brick, brick_x, from, to);
        state.bricks.push(Brick {
            handle,
            destroyed: false,
        });
        handle
    });

    log::debug!("Spawned obstacles with gap at {}", gap);
    state.events.push(GameEvent::PipesSpawned { gap });

    SpawnBatch { gap, pipes, bricks }
}
