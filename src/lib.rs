//! Flap Blaster - A side-scrolling flap-and-shoot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (session, spawning, collisions, scoring)
//! - `input`: Raw keyboard/pointer events to activate gestures
//! - `tuning`: Data-driven game balance
//! - `settings`: Frontend preferences
//! - `highscores`: Leaderboard of final scores
//! - `persistence`: JSON load/save for the above

pub mod highscores;
pub mod input;
pub mod persistence;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
///
/// Geometry that is baked into the sprite sheets. Balance values that a
/// designer may want to tweak live in [`Tuning`] instead.
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz, the arcade physics frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player spawn column
    pub const PLAYER_X: f32 = 32.0;
    pub const PLAYER_SIZE: Vec2 = Vec2::new(34.0, 24.0);

    /// Pipe body width (tiled column)
    pub const TUBE_WIDTH: f32 = 50.0;
    /// Pipe cap sprite size
    pub const CAP_SIZE: Vec2 = Vec2::new(52.0, 26.0);
    pub const BRICK_SIZE: Vec2 = Vec2::new(32.0, 32.0);
    pub const BULLET_SIZE: Vec2 = Vec2::new(8.0, 8.0);
    pub const EXPLOSION_SIZE: Vec2 = Vec2::new(32.0, 32.0);

    /// Spawned pipes start this far past the right edge
    pub const PIPE_SPAWN_OFFSET: f32 = 60.0;
    /// Bricks sit slightly inward of the pipe column
    pub const BRICK_SPAWN_OFFSET: f32 = 68.0;
    /// Upper brick top, measured from the gap line
    pub const BRICK_TOP_OFFSET: f32 = 27.0;
    /// Vertical distance between the two bricks
    pub const BRICK_SPACING: f32 = 74.0;
    /// Slide-in duration for freshly spawned obstacles
    pub const SLIDE_IN_MS: f32 = 1000.0;

    /// Nose-up tilt applied on every flap (degrees)
    pub const FLAP_ANGLE: f32 = -45.0;
    /// Nose-down tilt rate while playing (2.5 degrees per 60 Hz frame)
    pub const TILT_RATE: f32 = 150.0;
    pub const MAX_TILT: f32 = 90.0;

    /// Background scroll speed (1 unit per 60 Hz frame)
    pub const BACKGROUND_SCROLL_RATE: f32 = 60.0;

    /// Explosion animation: 5 frames at 20 fps
    pub const EXPLOSION_TTL_MS: f32 = 250.0;

    /// Camera shake on flap
    pub const SHAKE_INTENSITY: f32 = 0.01;
    pub const SHAKE_MS: f32 = 75.0;
    /// Splash overlay fade duration
    pub const OVERLAY_FADE_MS: f32 = 1000.0;
}

/// Sine in/out easing over t in [0, 1]
#[inline]
pub fn ease_sine_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    -((std::f32::consts::PI * t).cos() - 1.0) / 2.0
}

/// Round a score the way the HUD displays it (nearest integer, halves up)
#[inline]
pub fn display_score(score: f64) -> String {
    format!("{}", score.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert!(ease_sine_in_out(0.0).abs() < 1e-6);
        assert!((ease_sine_in_out(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_sine_in_out(0.5) - 0.5).abs() < 1e-6);
        // Clamped outside the unit interval
        assert!((ease_sine_in_out(2.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_display_score_rounds() {
        assert_eq!(display_score(0.0), "0");
        assert_eq!(display_score(0.25), "0");
        assert_eq!(display_score(0.5), "1");
        assert_eq!(display_score(2.75), "3");
    }
}
