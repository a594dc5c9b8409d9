//! Collision and scoring policy
//!
//! Pipes are lethal and bullet-proof. Bricks are lethal but can be shot down
//! for full credit. The player leaving the vertical play area is also lethal.

use super::physics::{EntityHandle, Physics};
use super::state::GameState;

/// Outcome of the projectile checks for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectileHits {
    /// Projectiles stopped by a pipe
    pub blocked: usize,
    /// Bricks shot down
    pub bricks_destroyed: usize,
}

/// Player y outside `[0, height]`
#[inline]
pub fn out_of_bounds(y: f32, height: f32) -> bool {
    y > height || y < 0.0
}

/// Check the player against pipes, bricks and the play area.
///
/// Marks the player dead and returns true on a fatal hit.
pub fn check_player(state: &mut GameState, physics: &mut impl Physics) -> bool {
    let player = [state.player.handle];
    let pipes = pipe_handles(state);
    let bricks = brick_handles(state);

    // Both checks run so separation is applied against both groups
    let hit_wall = physics.collide(&player, &pipes);
    let hit_brick = physics.collide(&player, &bricks);
    let escaped = physics
        .position(state.player.handle)
        .is_some_and(|p| out_of_bounds(p.y, state.tuning.world_height));

    if hit_wall || hit_brick || escaped {
        log::debug!(
            "Fatal: wall={} brick={} out_of_bounds={}",
            hit_wall,
            hit_brick,
            escaped
        );
        state.player.alive = false;
    }
    !state.player.alive
}

/// Resolve projectile overlaps against pipes, then bricks.
///
/// A projectile stopped by a pipe is gone before the brick pass, so it can
/// never also score. Each brick and each projectile is consumed at most once.
pub fn resolve_projectiles(state: &mut GameState, physics: &mut impl Physics) -> ProjectileHits {
    let mut hits = ProjectileHits::default();

    let mut blocked = Vec::new();
    physics.overlap(
        &state.weapon.handles(),
        &pipe_handles(state),
        &mut |bullet, _pipe| blocked.push(bullet),
    );
    for bullet in blocked {
        if !state.weapon.is_live(bullet) {
            continue;
        }
        if let Some(pos) = physics.position(bullet) {
            state.explode(physics, pos);
        }
        state.weapon.kill(physics, bullet);
        hits.blocked += 1;
    }

    let mut struck = Vec::new();
    physics.overlap(
        &state.weapon.handles(),
        &brick_handles(state),
        &mut |bullet, brick| struck.push((bullet, brick)),
    );
    for (bullet, brick) in struck {
        if !state.weapon.is_live(bullet) {
            continue;
        }
        let Some(index) = state
            .bricks
            .iter()
            .position(|b| b.handle == brick && !b.destroyed)
        else {
            continue;
        };

        if let Some(pos) = physics.position(brick) {
            state.explode(physics, pos);
        }
        state.weapon.kill(physics, bullet);
        state.bricks[index].destroyed = true;
        state.bricks.remove(index);
        physics.destroy_entity(brick);
        let credit = state.tuning.brick_credit;
        state.add_score(credit);
        hits.bricks_destroyed += 1;
    }

    if hits.bricks_destroyed > 0 {
        log::debug!("Shot down {} brick(s)", hits.bricks_destroyed);
    }
    hits
}

fn pipe_handles(state: &GameState) -> Vec<EntityHandle> {
    state.pipes.iter().map(|p| p.handle).collect()
}

fn brick_handles(state: &GameState) -> Vec<EntityHandle> {
    state
        .bricks
        .iter()
        .filter(|b| !b.destroyed)
        .map(|b| b.handle)
        .collect()
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::Tuning;
    use crate::sim::physics::EntityKind;
    use crate::sim::state::{Brick, GameEvent, Pipe, PipePiece};
    use crate::sim::world::ArcadeWorld;

    fn setup() -> (GameState, ArcadeWorld) {
        let mut world = ArcadeWorld::new();
        let mut state = GameState::new(9, Tuning::default(), &mut world);
        state.drain_events();
        (state, world)
    }

    fn add_brick(state: &mut GameState, world: &mut ArcadeWorld, pos: Vec2) -> EntityHandle {
        let handle = world.create_entity(EntityKind::Brick, pos);
        state.bricks.push(Brick {
            handle,
            destroyed: false,
        });
        handle
    }

    fn add_pipe(state: &mut GameState, world: &mut ArcadeWorld, pos: Vec2) -> EntityHandle {
        let handle = world.create_entity(EntityKind::CapDown, pos);
        state.pipes.push(Pipe {
            handle,
            piece: PipePiece::TopCap,
            passed: false,
        });
        handle
    }

    fn add_bullet(state: &mut GameState, world: &mut ArcadeWorld, pos: Vec2) -> EntityHandle {
        let handle = state
            .weapon
            .fire(world, pos, state.time_ms, &state.tuning)
            .unwrap();
        state.time_ms += 1000.0;
        handle
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(out_of_bounds(-0.1, 480.0));
        assert!(out_of_bounds(480.1, 480.0));
        assert!(!out_of_bounds(0.0, 480.0));
        assert!(!out_of_bounds(480.0, 480.0));
    }

    #[test]
    fn test_player_hits_pipe() {
        let (mut state, mut world) = setup();
        add_pipe(&mut state, &mut world, Vec2::new(20.0, 230.0));
        assert!(check_player(&mut state, &mut world));
        assert!(!state.player.alive);
    }

    #[test]
    fn test_player_hits_brick() {
        let (mut state, mut world) = setup();
        add_brick(&mut state, &mut world, Vec2::new(30.0, 235.0));
        assert!(check_player(&mut state, &mut world));
    }

    #[test]
    fn test_player_clear_and_escaped() {
        let (mut state, mut world) = setup();
        add_pipe(&mut state, &mut world, Vec2::new(200.0, 0.0));
        assert!(!check_player(&mut state, &mut world));

        world.set_position(state.player.handle, Vec2::new(32.0, -1.0));
        assert!(check_player(&mut state, &mut world));
    }

    #[test]
    fn test_bullet_vs_brick() {
        let (mut state, mut world) = setup();
        let brick_pos = Vec2::new(150.0, 100.0);
        let brick = add_brick(&mut state, &mut world, brick_pos);
        let bullet = add_bullet(&mut state, &mut world, Vec2::new(160.0, 110.0));

        let hits = resolve_projectiles(&mut state, &mut world);
        assert_eq!(hits.bricks_destroyed, 1);
        assert_eq!(state.score(), 1.0);
        assert!(!world.exists(brick));
        assert!(!world.exists(bullet));
        assert!(state.bricks.is_empty());
        assert!(state.weapon.projectiles.is_empty());
        assert_eq!(state.explosions.len(), 1);
        assert_eq!(world.position(state.explosions[0].handle), Some(brick_pos));
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::Explosion { pos: brick_pos })
        );
    }

    #[test]
    fn test_bullet_vs_pipe() {
        let (mut state, mut world) = setup();
        let pipe = add_pipe(&mut state, &mut world, Vec2::new(150.0, 100.0));
        let bullet_pos = Vec2::new(160.0, 110.0);
        let bullet = add_bullet(&mut state, &mut world, bullet_pos);

        let hits = resolve_projectiles(&mut state, &mut world);
        assert_eq!(hits.blocked, 1);
        assert_eq!(state.score(), 0.0);
        assert!(world.exists(pipe));
        assert!(!world.exists(bullet));
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(world.position(state.explosions[0].handle), Some(bullet_pos));
    }

    #[test]
    fn test_pipe_shields_overlapping_brick() {
        let (mut state, mut world) = setup();
        add_pipe(&mut state, &mut world, Vec2::new(150.0, 100.0));
        let brick = add_brick(&mut state, &mut world, Vec2::new(150.0, 100.0));
        add_bullet(&mut state, &mut world, Vec2::new(160.0, 110.0));

        let hits = resolve_projectiles(&mut state, &mut world);
        assert_eq!(hits.blocked, 1);
        assert_eq!(hits.bricks_destroyed, 0);
        assert_eq!(state.score(), 0.0);
        assert!(world.exists(brick));
        assert_eq!(state.explosions.len(), 1);
    }

    #[test]
    fn test_two_bullets_one_brick() {
        let (mut state, mut world) = setup();
        add_brick(&mut state, &mut world, Vec2::new(150.0, 100.0));
        let first = add_bullet(&mut state, &mut world, Vec2::new(155.0, 110.0));
        let second = add_bullet(&mut state, &mut world, Vec2::new(165.0, 110.0));

        let hits = resolve_projectiles(&mut state, &mut world);
        assert_eq!(hits.bricks_destroyed, 1);
        assert_eq!(state.score(), 1.0);
        assert!(!world.exists(first));
        // The second bullet flies on
        assert!(world.exists(second));
        assert!(state.weapon.is_live(second));
    }

    #[test]
    fn test_one_bullet_two_bricks() {
        let (mut state, mut world) = setup();
        let a = add_brick(&mut state, &mut world, Vec2::new(130.0, 100.0));
        let b = add_brick(&mut state, &mut world, Vec2::new(158.0, 100.0));
        add_bullet(&mut state, &mut world, Vec2::new(160.0, 110.0));

        let hits = resolve_projectiles(&mut state, &mut world);
        assert_eq!(hits.bricks_destroyed, 1);
        assert!(!world.exists(a));
        assert!(world.exists(b));
        assert_eq!(state.bricks.len(), 1);
    }
}
