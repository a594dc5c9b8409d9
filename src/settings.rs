//! Game settings and preferences
//!
//! Frontend-only preferences, persisted separately from tuning. They decide
//! which [`GameEvent`]s the frontend acts on; the simulation never reads them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence::{self, PersistError};
use crate::sim::GameEvent;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visual Effects ===
    /// Camera shake on flap
    pub screen_shake: bool,
    /// Explosion sprites
    pub explosions: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (no shake, instant overlay fades)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_shake: true,
            explosions: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective sound volume, 0 when muted
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Whether the frontend should present this event at all
    pub fn wants(&self, event: &GameEvent) -> bool {
        match event {
            GameEvent::Sound(_) => self.effective_volume() > 0.0,
            GameEvent::CameraShake { .. } => self.effective_screen_shake(),
            GameEvent::Explosion { .. } => self.explosions,
            _ => true,
        }
    }

    /// Overlay fade duration after accessibility adjustments
    pub fn fade_duration(&self, duration_ms: f32) -> f32 {
        if self.reduced_motion { 0.0 } else { duration_ms }
    }

    /// Load settings from disk, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match persistence::load_json(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::info!("Using default settings ({e})");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        persistence::save_json(path, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::Sound;

    #[test]
    fn test_reduced_motion_disables_shake() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        let shake = GameEvent::CameraShake {
            intensity: 0.01,
            duration_ms: 75.0,
        };
        assert!(!settings.wants(&shake));
        assert!(Settings::default().wants(&shake));
        assert_eq!(settings.fade_duration(1000.0), 0.0);
    }

    #[test]
    fn test_mute_filters_sounds_only() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        assert!(!settings.wants(&GameEvent::Sound(Sound::Jump)));
        assert!(settings.wants(&GameEvent::Explosion { pos: Vec2::ZERO }));
        assert!(settings.wants(&GameEvent::GameOver { score: 1.0 }));
    }

    #[test]
    fn test_every_field_is_consumed() {
        // Each persisted preference feeds `wants`, `effective_volume` or `fade_duration`
        let json = serde_json::to_value(Settings::default()).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "explosions",
                "master_volume",
                "muted",
                "reduced_motion",
                "screen_shake",
                "sfx_volume"
            ]
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "muted": true }"#).unwrap();
        assert!(settings.muted);
        assert!(settings.screen_shake);
        assert_eq!(settings.master_volume, 0.8);
    }
}
