//! Physics collaborator contract
//!
//! The gameplay core never integrates motion itself. It asks a `Physics`
//! implementation to create bodies, move them, and report collisions. Any
//! engine (or the bundled [`ArcadeWorld`](super::world::ArcadeWorld)) can sit
//! behind this trait as long as it honors the semantics documented here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Opaque handle to a physics body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityHandle(pub u32);

/// What a body represents; decides its size and anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    /// Tiled pipe column of the given height
    Tube { height: f32 },
    /// Cap on the end of a top pipe (opening faces down)
    CapDown,
    /// Cap on the end of a bottom pipe (opening faces up)
    CapUp,
    Brick,
    Bullet,
    Explosion,
}

impl EntityKind {
    pub fn size(&self) -> Vec2 {
        match self {
            EntityKind::Player => PLAYER_SIZE,
            EntityKind::Tube { height } => Vec2::new(TUBE_WIDTH, *height),
            EntityKind::CapDown | EntityKind::CapUp => CAP_SIZE,
            EntityKind::Brick => BRICK_SIZE,
            EntityKind::Bullet => BULLET_SIZE,
            EntityKind::Explosion => EXPLOSION_SIZE,
        }
    }

    /// Fraction of the size the position refers to (0,0 = top-left)
    pub fn anchor(&self) -> Vec2 {
        match self {
            EntityKind::Player | EntityKind::Bullet => Vec2::splat(0.5),
            _ => Vec2::ZERO,
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_anchor(position: Vec2, size: Vec2, anchor: Vec2) -> Self {
        let min = position - size * anchor;
        Self {
            min,
            max: min + size,
        }
    }

    /// Strict overlap; touching edges do not count
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Smallest translation that moves `self` out of `other`
    pub fn separation_from(&self, other: &Aabb) -> Vec2 {
        let push_left = other.min.x - self.max.x;
        let push_right = other.max.x - self.min.x;
        let push_up = other.min.y - self.max.y;
        let push_down = other.max.y - self.min.y;

        let dx = if push_right.abs() < push_left.abs() {
            push_right
        } else {
            push_left
        };
        let dy = if push_down.abs() < push_up.abs() {
            push_down
        } else {
            push_up
        };

        if dx.abs() < dy.abs() {
            Vec2::new(dx, 0.0)
        } else {
            Vec2::new(0.0, dy)
        }
    }
}

/// The rendering/physics engine as seen by the gameplay core.
///
/// Calls are infallible: operations on a handle that no longer exists are
/// ignored, and queries on it return `None`.
pub trait Physics {
    fn create_entity(&mut self, kind: EntityKind, position: Vec2) -> EntityHandle;
    fn destroy_entity(&mut self, handle: EntityHandle);
    fn exists(&self, handle: EntityHandle) -> bool;

    fn position(&self, handle: EntityHandle) -> Option<Vec2>;
    fn set_position(&mut self, handle: EntityHandle, position: Vec2);
    fn velocity(&self, handle: EntityHandle) -> Option<Vec2>;
    fn set_velocity(&mut self, handle: EntityHandle, velocity: Vec2);
    /// Downward acceleration applied to this body only
    fn set_gravity(&mut self, handle: EntityHandle, gravity: f32);
    fn gravity(&self, handle: EntityHandle) -> Option<f32>;

    /// Animate the body's y from `from` to `to` (sine in/out). While the
    /// tween runs it owns y; x keeps following the velocity.
    fn tween_y(&mut self, handle: EntityHandle, from: f32, to: f32, duration_ms: f32);

    /// Overlap test that also pushes bodies in `a` out of bodies in `b`.
    /// Returns true if any pair overlapped.
    fn collide(&mut self, a: &[EntityHandle], b: &[EntityHandle]) -> bool;

    /// Overlap test without separation; `on_hit` is called once per
    /// overlapping pair, in the order of `a` then `b`.
    fn overlap(
        &self,
        a: &[EntityHandle],
        b: &[EntityHandle],
        on_hit: &mut dyn FnMut(EntityHandle, EntityHandle),
    );

    /// Advance all bodies by `dt` seconds
    fn step(&mut self, dt: f32);
}
