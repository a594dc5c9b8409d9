//! Data-driven game balance
//!
//! Every value has a default matching the shipped game, and missing fields in
//! a tuning file fall back to those defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence::{self, PersistError};

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// World dimensions
    pub world_width: f32,
    pub world_height: f32,

    // === Player ===
    /// Upward velocity set by each flap
    pub jump_speed: f32,
    /// Downward acceleration while playing
    pub gravity: f32,

    // === Obstacles ===
    /// Horizontal scroll speed of obstacles
    pub speed: f32,
    /// Vertical opening between the top and bottom pipe
    pub pipe_space: f32,
    /// Time between spawn batches
    pub spawn_interval_ms: f32,
    /// Inclusive range for the gap line
    pub gap_min: i32,
    pub gap_max: i32,
    /// Pipes left of this x are removed and credited
    pub removal_x: f32,

    // === Weapon ===
    /// Minimum time between shots
    pub fire_rate_ms: f32,
    pub bullet_speed: f32,
    /// Maximum live projectiles
    pub bullet_pool: usize,

    // === Scoring ===
    /// Credit per pipe piece scrolled off screen
    pub pipe_credit: f64,
    /// Credit per brick shot down
    pub brick_credit: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: 320.0,
            world_height: 480.0,

            jump_speed: 247.0,
            gravity: 800.0,

            speed: 130.0,
            pipe_space: 133.0,
            spawn_interval_ms: 2000.0,
            gap_min: 90,
            gap_max: 280,
            removal_x: -50.0,

            fire_rate_ms: 100.0,
            bullet_speed: 600.0,
            bullet_pool: 10,

            pipe_credit: 0.25,
            brick_credit: 1.0,
        }
    }
}

impl Tuning {
    /// Vertical center of the world (player rest height)
    pub fn center_y(&self) -> f32 {
        self.world_height / 2.0
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match persistence::load_json::<Self>(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning.sanitized()
            }
            Err(e) => {
                log::warn!("Using default tuning ({e})");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        persistence::save_json(path, self)
    }

    /// Repair values that would break the simulation
    fn sanitized(mut self) -> Self {
        if self.gap_min > self.gap_max {
            log::warn!(
                "gap_min {} > gap_max {}, swapping",
                self.gap_min,
                self.gap_max
            );
            std::mem::swap(&mut self.gap_min, &mut self.gap_max);
        }
        if self.spawn_interval_ms <= 0.0 {
            log::warn!("Non-positive spawn interval, using default");
            self.spawn_interval_ms = Self::default().spawn_interval_ms;
        }
        self.fire_rate_ms = self.fire_rate_ms.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "speed": 200.0 }"#).unwrap();
        assert_eq!(tuning.speed, 200.0);
        assert_eq!(tuning.jump_speed, 247.0);
        assert_eq!(tuning.gap_min, 90);
        assert_eq!(tuning.gap_max, 280);
    }

    #[test]
    fn test_sanitize_swaps_gap_range() {
        let tuning = Tuning {
            gap_min: 300,
            gap_max: 100,
            spawn_interval_ms: -5.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!((tuning.gap_min, tuning.gap_max), (100, 300));
        assert_eq!(tuning.spawn_interval_ms, 2000.0);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load(Path::new("/nonexistent/flap-blaster/tuning.json"));
        assert_eq!(tuning, Tuning::default());
    }
}
