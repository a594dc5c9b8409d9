//! Flap Blaster entry point
//!
//! Headless native runner: the autopilot plays on the bundled arcade physics
//! world, events are logged, and final scores go to the leaderboard.
//!
//! Usage: `flap-blaster [--seconds N] [--seed N] [--tuning FILE]
//! [--settings FILE] [--scores FILE]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use flap_blaster::consts::*;
use flap_blaster::sim::{
    ArcadeWorld, GameEvent, GameState, Sound, TickInput, autopilot_input, tick,
};
use flap_blaster::{HighScores, Settings, Tuning};

/// Render-rate frame time fed to the fixed-step accumulator
const FRAME_DT: f32 = 1.0 / 144.0;

#[derive(Parser, Debug)]
#[command(name = "flap-blaster")]
#[command(about = "Headless Flap Blaster run driven by the autopilot")]
struct Cli {
    /// Simulated seconds to run
    #[arg(long, default_value_t = 60.0, value_parser = parse_seconds)]
    seconds: f32,
    /// Seed for obstacle gap generation
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,
    /// Tuning JSON (defaults when missing or malformed)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Frontend settings JSON
    #[arg(long)]
    settings: Option<PathBuf>,
    /// High score file, loaded at start and saved on exit
    #[arg(long)]
    scores: Option<PathBuf>,
}

fn parse_seconds(raw: &str) -> Result<f32, String> {
    let seconds: f32 = raw.parse().map_err(|e| format!("{e}"))?;
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(format!("expected a non-negative duration, got {raw}"))
    }
}

/// Game instance holding all state
struct Game {
    state: GameState,
    world: ArcadeWorld,
    settings: Settings,
    high_scores: HighScores,
    accumulator: f32,
    runs: u32,
}

impl Game {
    fn new(opts: &Cli) -> Self {
        let tuning = opts
            .tuning
            .as_deref()
            .map(Tuning::load)
            .unwrap_or_default();
        let settings = opts
            .settings
            .as_deref()
            .map(Settings::load)
            .unwrap_or_default();
        let high_scores = opts
            .scores
            .as_deref()
            .map(HighScores::load)
            .unwrap_or_default();

        let mut world = ArcadeWorld::new();
        let state = GameState::new(opts.seed, tuning, &mut world);
        Self {
            state,
            world,
            settings,
            high_scores,
            accumulator: 0.0,
            runs: 0,
        }
    }

    /// Run simulation ticks for one frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input: TickInput = autopilot_input(&self.state, &self.world);
            tick(&mut self.state, &mut self.world, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            for event in self.state.drain_events() {
                self.present(event);
            }
        }
    }

    /// Stand-in for audio/render: log what a frontend would do
    fn present(&mut self, event: GameEvent) {
        if !self.settings.wants(&event) {
            return;
        }
        match event {
            GameEvent::Sound(Sound::Jump) => log::trace!("sfx: jump"),
            GameEvent::Sound(Sound::Defeat) => log::debug!("sfx: defeat"),
            GameEvent::CameraShake { .. } => log::trace!("camera shake"),
            GameEvent::OverlayFade { alpha, duration_ms } => log::debug!(
                "overlay -> {alpha} over {}ms",
                self.settings.fade_duration(duration_ms)
            ),
            GameEvent::Explosion { pos } => {
                log::debug!("explosion at ({:.0}, {:.0})", pos.x, pos.y)
            }
            GameEvent::ScoreChanged { score } => {
                log::trace!("score {}", flap_blaster::display_score(score))
            }
            GameEvent::PipesSpawned { gap } => log::trace!("pipes at gap {gap}"),
            GameEvent::RunStarted => self.runs += 1,
            GameEvent::GameOver { score } => {
                let survived = self.state.session.elapsed_ms / 1000.0;
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs_f64() * 1000.0)
                    .unwrap_or_default();
                if let Some(rank) = self.high_scores.add_score(score, survived, now) {
                    log::info!("New high score #{rank}: {score}");
                }
            }
        }
    }
}

fn main() {
    env_logger::init();
    let opts = Cli::parse();
    log::info!("Flap Blaster (headless) starting: {:?}", opts);

    let mut game = Game::new(&opts);
    let frames = (opts.seconds / FRAME_DT).ceil() as u64;
    for _ in 0..frames {
        game.update(FRAME_DT);
    }

    if let Some(path) = &opts.scores {
        if let Err(e) = game.high_scores.save(path) {
            log::error!("Failed to save high scores: {e}");
        }
    }

    log::info!(
        "Finished {} run(s); best {:?}",
        game.runs,
        game.high_scores.top_score()
    );
    let snapshot = game.state.snapshot(&game.world);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}
