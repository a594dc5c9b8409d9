//! Rate-limited projectile weapon
//!
//! A shot is refused while the fire-rate cooldown runs or while the pool of
//! live projectiles is full.

use glam::Vec2;

use super::physics::{EntityHandle, EntityKind, Physics};
use crate::Tuning;

/// A live projectile
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub handle: EntityHandle,
}

#[derive(Debug, Clone, Default)]
pub struct Weapon {
    /// Live projectiles, oldest first
    pub projectiles: Vec<Projectile>,
    /// Earliest simulation time the next shot may leave
    next_fire_ms: f64,
}

impl Weapon {
    /// Fire one projectile from `origin` if the weapon is ready
    pub fn fire(
        &mut self,
        physics: &mut impl Physics,
        origin: Vec2,
        now_ms: f64,
        tuning: &Tuning,
    ) -> Option<EntityHandle> {
        if now_ms < self.next_fire_ms {
            return None;
        }
        if self.projectiles.len() >= tuning.bullet_pool {
            log::debug!("Weapon pool exhausted ({} live)", self.projectiles.len());
            return None;
        }

        let handle = physics.create_entity(EntityKind::Bullet, origin);
        physics.set_velocity(handle, Vec2::new(tuning.bullet_speed, 0.0));
        self.projectiles.push(Projectile { handle });
        self.next_fire_ms = now_ms + f64::from(tuning.fire_rate_ms);
        Some(handle)
    }

    /// Remove a projectile; returns false if it was already gone
    pub fn kill(&mut self, physics: &mut impl Physics, handle: EntityHandle) -> bool {
        let Some(i) = self.projectiles.iter().position(|p| p.handle == handle) else {
            return false;
        };
        self.projectiles.remove(i);
        physics.destroy_entity(handle);
        true
    }

    pub fn is_live(&self, handle: EntityHandle) -> bool {
        self.projectiles.iter().any(|p| p.handle == handle)
    }

    /// Kill every projectile whose center left the world rectangle
    pub fn kill_out_of_bounds(&mut self, physics: &mut impl Physics, width: f32, height: f32) {
        self.projectiles.retain(|p| {
            let inside = physics.position(p.handle).is_some_and(|pos| {
                (0.0..=width).contains(&pos.x) && (0.0..=height).contains(&pos.y)
            });
            if !inside {
                physics.destroy_entity(p.handle);
            }
            inside
        });
    }

    pub fn handles(&self) -> Vec<EntityHandle> {
        self.projectiles.iter().map(|p| p.handle).collect()
    }
}
