//! Game state and core simulation types
//!
//! Everything the controller owns lives in [`GameState`]. Body positions and
//! velocities live in the physics collaborator; the state only keeps handles.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::physics::{EntityHandle, EntityKind, Physics};
use super::timer::RepeatingTimer;
use super::weapon::Weapon;
use crate::Tuning;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Splash overlay shown, player floating, waiting for the first flap
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended; routes straight back to `Idle`
    GameOver,
}

/// Score and phase of the current run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub phase: GamePhase,
    /// Fractional: pipes credit a quarter point per piece
    pub score: f64,
    /// Time spent in `Playing` this run
    pub elapsed_ms: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0.0,
            elapsed_ms: 0.0,
        }
    }
}

impl Session {
    /// Text shown on the HUD
    pub fn score_text(&self) -> String {
        crate::display_score(self.score)
    }
}

/// The flying player
#[derive(Debug, Clone)]
pub struct Player {
    pub handle: EntityHandle,
    /// Tilt in degrees, negative is nose-up
    pub angle: f32,
    /// Cleared by a fatal hit until the game-over handler resets the player
    pub alive: bool,
}

/// Which part of a pipe pair a passage element is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipePiece {
    TopTube,
    TopCap,
    BottomCap,
    BottomTube,
}

/// A passage element (lethal, scrolls off for partial credit)
#[derive(Debug, Clone)]
pub struct Pipe {
    pub handle: EntityHandle,
    pub piece: PipePiece,
    pub passed: bool,
}

/// A destructible brick (lethal, shoot for full credit)
#[derive(Debug, Clone)]
pub struct Brick {
    pub handle: EntityHandle,
    pub destroyed: bool,
}

/// A short-lived explosion effect
#[derive(Debug, Clone)]
pub struct Explosion {
    pub handle: EntityHandle,
    pub ttl_ms: f32,
}

/// Sound cues for the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    Jump,
    Defeat,
}

/// Side effects for the frontend, drained once per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(Sound),
    CameraShake { intensity: f32, duration_ms: f32 },
    /// Fade the splash overlay to `alpha`
    OverlayFade { alpha: f32, duration_ms: f32 },
    Explosion { pos: Vec2 },
    ScoreChanged { score: f64 },
    PipesSpawned { gap: i32 },
    RunStarted,
    GameOver { score: f64 },
}

/// Complete controller state (no globals)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    rng: Pcg32,
    pub session: Session,
    pub player: Player,
    /// Passage elements, in spawn order
    pub pipes: Vec<Pipe>,
    /// Destructible bricks, in spawn order
    pub bricks: Vec<Brick>,
    pub weapon: Weapon,
    pub explosions: Vec<Explosion>,
    pub spawn_timer: RepeatingTimer,
    /// Cosmetic background scroll (decreases forever)
    pub background_offset: f32,
    /// Simulation clock
    pub time_ms: f64,
    pub time_ticks: u64,
    /// Pending frontend events
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create the state and its player body, starting in `Idle`
    pub fn new(seed: u64, tuning: Tuning, physics: &mut impl Physics) -> Self {
        let handle = physics.create_entity(
            EntityKind::Player,
            Vec2::new(PLAYER_X, tuning.center_y()),
        );
        let spawn_timer = RepeatingTimer::new(tuning.spawn_interval_ms);

        let mut state = Self {
            seed,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            session: Session::default(),
            player: Player {
                handle,
                angle: 0.0,
                alive: true,
            },
            pipes: Vec::new(),
            bricks: Vec::new(),
            weapon: Weapon::default(),
            explosions: Vec::new(),
            spawn_timer,
            background_offset: 0.0,
            time_ms: 0.0,
            time_ticks: 0,
            events: Vec::new(),
        };

        state.events.push(GameEvent::OverlayFade {
            alpha: 1.0,
            duration_ms: OVERLAY_FADE_MS,
        });
        state
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn score(&self) -> f64 {
        self.session.score
    }

    /// Uniform integer in `[min, max]`
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }

    pub fn add_score(&mut self, value: f64) {
        self.session.score += value;
        self.events.push(GameEvent::ScoreChanged {
            score: self.session.score,
        });
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Spawn an explosion effect drifting with the obstacles
    pub fn explode(&mut self, physics: &mut impl Physics, pos: Vec2) {
        let handle = physics.create_entity(EntityKind::Explosion, pos);
        physics.set_velocity(handle, Vec2::new(-self.tuning.speed, 0.0));
        self.explosions.push(Explosion {
            handle,
            ttl_ms: EXPLOSION_TTL_MS,
        });
        self.events.push(GameEvent::Explosion { pos });
    }

    /// Destroy every pipe and brick body and clear both collections
    pub fn clear_obstacles(&mut self, physics: &mut impl Physics) {
        for pipe in self.pipes.drain(..) {
            physics.destroy_entity(pipe.handle);
        }
        for brick in self.bricks.drain(..) {
            physics.destroy_entity(brick.handle);
        }
    }

    /// Serializable summary for logging/debugging
    pub fn snapshot(&self, physics: &impl Physics) -> Snapshot {
        Snapshot {
            seed: self.seed,
            time_ticks: self.time_ticks,
            session: self.session.clone(),
            score_text: self.session.score_text(),
            player_pos: physics.position(self.player.handle).unwrap_or_default(),
            player_angle: self.player.angle,
            pipes: self.pipes.len(),
            bricks: self.bricks.len(),
            projectiles: self.weapon.projectiles.len(),
            explosions: self.explosions.len(),
        }
    }
}

/// Point-in-time summary of a [`GameState`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub time_ticks: u64,
    pub session: Session,
    pub score_text: String,
    pub player_pos: Vec2,
    pub player_angle: f32,
    pub pipes: usize,
    pub bricks: usize,
    pub projectiles: usize,
    pub explosions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::world::ArcadeWorld;

    #[test]
    fn test_new_state_is_idle_with_centered_player() {
        let mut world = ArcadeWorld::new();
        let state = GameState::new(1, Tuning::default(), &mut world);
        assert_eq!(state.phase(), GamePhase::Idle);
        assert_eq!(state.score(), 0.0);
        assert_eq!(
            world.position(state.player.handle),
            Some(Vec2::new(PLAYER_X, 240.0))
        );
        assert_eq!(world.gravity(state.player.handle), Some(0.0));
        assert!(!state.spawn_timer.is_running());
    }

    #[test]
    fn test_random_int_is_inclusive_and_seeded() {
        let mut world = ArcadeWorld::new();
        let mut a = GameState::new(7, Tuning::default(), &mut world);
        let mut b = GameState::new(7, Tuning::default(), &mut world);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..500 {
            let x = a.random_int(0, 3);
            assert_eq!(x, b.random_int(0, 3));
            assert!((0..=3).contains(&x));
            seen_min |= x == 0;
            seen_max |= x == 3;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_explosion_drifts_left() {
        let mut world = ArcadeWorld::new();
        let mut state = GameState::new(1, Tuning::default(), &mut world);
        state.drain_events();
        state.explode(&mut world, Vec2::new(100.0, 50.0));
        let fx = &state.explosions[0];
        assert_eq!(world.velocity(fx.handle), Some(Vec2::new(-130.0, 0.0)));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Explosion {
                pos: Vec2::new(100.0, 50.0)
            }]
        );
    }
}
