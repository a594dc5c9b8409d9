//! Minimal arcade physics world
//!
//! A deterministic implementation of [`Physics`]: axis-aligned boxes,
//! per-body gravity, explicit Euler integration and sine-eased y tweens.
//! Bodies are kept sorted by id so iteration order is stable.

use glam::Vec2;

use super::physics::{Aabb, EntityHandle, EntityKind, Physics};
use crate::ease_sine_in_out;

#[derive(Debug, Clone)]
struct Tween {
    from: f32,
    to: f32,
    duration_ms: f32,
    elapsed_ms: f32,
}

impl Tween {
    /// Advance and return the new y plus whether the tween finished
    fn advance(&mut self, dt_ms: f32) -> (f32, bool) {
        self.elapsed_ms += dt_ms;
        let t = if self.duration_ms > 0.0 {
            (self.elapsed_ms / self.duration_ms).min(1.0)
        } else {
            1.0
        };
        let y = self.from + (self.to - self.from) * ease_sine_in_out(t);
        (y, t >= 1.0)
    }
}

#[derive(Debug, Clone)]
struct Body {
    id: u32,
    kind: EntityKind,
    pos: Vec2,
    vel: Vec2,
    gravity: f32,
    tween: Option<Tween>,
}

impl Body {
    fn bounds(&self) -> Aabb {
        Aabb::from_anchor(self.pos, self.kind.size(), self.kind.anchor())
    }
}

/// Reference physics world used headless and in tests
#[derive(Debug, Clone)]
pub struct ArcadeWorld {
    bodies: Vec<Body>,
    next_id: u32,
}

impl Default for ArcadeWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcadeWorld {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of live bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn kind(&self, handle: EntityHandle) -> Option<EntityKind> {
        self.body(handle).map(|b| b.kind)
    }

    pub fn bounds(&self, handle: EntityHandle) -> Option<Aabb> {
        self.body(handle).map(Body::bounds)
    }

    /// Whether a tween is still driving this body
    pub fn is_tweening(&self, handle: EntityHandle) -> bool {
        self.body(handle).is_some_and(|b| b.tween.is_some())
    }

    fn index_of(&self, handle: EntityHandle) -> Option<usize> {
        self.bodies.binary_search_by_key(&handle.0, |b| b.id).ok()
    }

    fn body(&self, handle: EntityHandle) -> Option<&Body> {
        self.index_of(handle).map(|i| &self.bodies[i])
    }

    fn body_mut(&mut self, handle: EntityHandle) -> Option<&mut Body> {
        match self.index_of(handle) {
            Some(i) => Some(&mut self.bodies[i]),
            None => {
                log::debug!("Ignoring call on stale handle {:?}", handle);
                None
            }
        }
    }
}

impl Physics for ArcadeWorld {
    fn create_entity(&mut self, kind: EntityKind, position: Vec2) -> EntityHandle {
        let id = self.next_id;
        self.next_id += 1;
        // Ids are monotonic so pushing keeps the vec sorted
        self.bodies.push(Body {
            id,
            kind,
            pos: position,
            vel: Vec2::ZERO,
            gravity: 0.0,
            tween: None,
        });
        EntityHandle(id)
    }

    fn destroy_entity(&mut self, handle: EntityHandle) {
        if let Some(i) = self.index_of(handle) {
            self.bodies.remove(i);
        }
    }

    fn exists(&self, handle: EntityHandle) -> bool {
        self.index_of(handle).is_some()
    }

    fn position(&self, handle: EntityHandle) -> Option<Vec2> {
        self.body(handle).map(|b| b.pos)
    }

    fn set_position(&mut self, handle: EntityHandle, position: Vec2) {
        if let Some(body) = self.body_mut(handle) {
            body.pos = position;
            body.tween = None;
        }
    }

    fn velocity(&self, handle: EntityHandle) -> Option<Vec2> {
        self.body(handle).map(|b| b.vel)
    }

    fn set_velocity(&mut self, handle: EntityHandle, velocity: Vec2) {
        if let Some(body) = self.body_mut(handle) {
            body.vel = velocity;
        }
    }

    fn set_gravity(&mut self, handle: EntityHandle, gravity: f32) {
        if let Some(body) = self.body_mut(handle) {
            body.gravity = gravity;
        }
    }

    fn gravity(&self, handle: EntityHandle) -> Option<f32> {
        self.body(handle).map(|b| b.gravity)
    }

    fn tween_y(&mut self, handle: EntityHandle, from: f32, to: f32, duration_ms: f32) {
        if let Some(body) = self.body_mut(handle) {
            body.pos.y = from;
            body.tween = Some(Tween {
                from,
                to,
                duration_ms,
                elapsed_ms: 0.0,
            });
        }
    }

    fn collide(&mut self, a: &[EntityHandle], b: &[EntityHandle]) -> bool {
        let mut hit = false;
        for &ha in a {
            for &hb in b {
                let (Some(ba), Some(bb)) = (self.bounds(ha), self.bounds(hb)) else {
                    continue;
                };
                if ba.intersects(&bb) {
                    hit = true;
                    let push = ba.separation_from(&bb);
                    if let Some(body) = self.body_mut(ha) {
                        body.pos += push;
                    }
                }
            }
        }
        hit
    }

    fn overlap(
        &self,
        a: &[EntityHandle],
        b: &[EntityHandle],
        on_hit: &mut dyn FnMut(EntityHandle, EntityHandle),
    ) {
        for &ha in a {
            let Some(ba) = self.bounds(ha) else { continue };
            for &hb in b {
                let Some(bb) = self.bounds(hb) else { continue };
                if ba.intersects(&bb) {
                    on_hit(ha, hb);
                }
            }
        }
    }

    fn step(&mut self, dt: f32) {
        let dt_ms = dt * 1000.0;
        for body in &mut self.bodies {
            body.pos.x += body.vel.x * dt;

            if let Some(tween) = &mut body.tween {
                let (y, done) = tween.advance(dt_ms);
                body.pos.y = y;
                if done {
                    body.tween = None;
                }
            } else {
                body.vel.y += body.gravity * dt;
                body.pos.y += body.vel.y * dt;
            }
        }
    }
}
