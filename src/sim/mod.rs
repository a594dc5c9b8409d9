//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order, body id)
//! - No rendering, audio or platform dependencies; those happen through the
//!   [`Physics`] collaborator and drained [`GameEvent`]s

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod scroll;
pub mod session;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod timer;
pub mod weapon;
pub mod world;

pub use autopilot::autopilot_input;
pub use collision::{ProjectileHits, check_player, out_of_bounds, resolve_projectiles};
pub use physics::{Aabb, EntityHandle, EntityKind, Physics};
pub use session::{activate, game_over, start_playing};
pub use spawner::{SpawnBatch, spawn_batch};
pub use state::{
    Brick, Explosion, GameEvent, GamePhase, GameState, Pipe, PipePiece, Player, Session, Snapshot,
    Sound,
};
pub use tick::{TickInput, tick};
pub use timer::RepeatingTimer;
pub use weapon::{Projectile, Weapon};
pub use world::ArcadeWorld;
