//! Game state owned by the simulation coordinator
//!
//! Score, difficulty tunables, the live obstacle set and the actor all live
//! here, mutated only by [`super::tick::tick`]. Presentation readers treat a
//! frame's snapshot as immutable until the next step.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::obstacle::Obstacle;
use crate::tuning::{Difficulty, Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen; the actor hovers with an idle wing cycle
    Menu,
    /// Active gameplay
    Playing,
    /// Host stopped stepping the playing phase
    Paused,
    /// Run ended at the ground
    GameOver,
}

/// One-frame notifications for the host (audio, HUD, phase UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An impulse was applied this frame
    Flapped,
    /// An obstacle was passed; carries the new total
    Scored { total: u32 },
    /// Tunables were tightened after a score milestone
    DifficultyRaised,
    /// The actor hit an obstacle or left the playable bounds
    Died,
    /// The run ended (ground contact)
    GameOver,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed; the same seed yields the same obstacle stream
    pub seed: u64,
    pub tuning: Tuning,
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    pub actor: Actor,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Obstacles passed this run
    pub score: u32,
    /// Best score across runs; storing it anywhere is the host's job
    pub high_score: u32,
    /// Current obstacle speed (px/s)
    pub speed: f32,
    /// Current corridor height for newly spawned obstacles
    pub gap_height: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    pub spawn_timer: f32,
    /// Simulation frame counter
    pub time_ticks: u64,
    /// Events raised during the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Build a fresh game in the menu phase.
    ///
    /// The tuning is validated here so spawning never has to re-check that a
    /// corridor fits the playfield.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;

        let preset = tuning.preset(Difficulty::default());
        let actor = Actor::new(
            tuning.start_position(),
            tuning.gravity,
            tuning.impulse_strength,
        );

        Ok(Self {
            seed,
            difficulty: Difficulty::default(),
            phase: GamePhase::Menu,
            actor,
            obstacles: Vec::new(),
            score: 0,
            high_score: 0,
            speed: preset.speed,
            gap_height: preset.gap_height,
            spawn_interval: preset.spawn_interval,
            spawn_timer: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        })
    }

    /// Select a difficulty level and load its starting tunables
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        let preset = self.tuning.preset(difficulty);
        self.speed = preset.speed;
        self.gap_height = preset.gap_height;
        self.spawn_interval = preset.spawn_interval;
        log::debug!(
            "difficulty {}: speed={} gap={} interval={}",
            difficulty.as_str(),
            self.speed,
            self.gap_height,
            self.spawn_interval
        );
    }

    /// Restart the current run: fresh actor, empty field, score back to zero,
    /// tunables back to the selected difficulty's preset. The high score and
    /// the RNG stream carry over.
    pub fn reset_run(&mut self) {
        self.actor.reset(self.tuning.start_position());
        self.obstacles.clear();
        self.spawn_timer = 0.0;
        self.score = 0;
        self.events.clear();
        self.set_difficulty(self.difficulty);
    }

    /// Spawn one obstacle at the right boundary with a freshly randomized
    /// gap center. The admissible band keeps both barriers non-negative.
    pub fn spawn_obstacle(&mut self) {
        let min_center = self.tuning.min_gap_center;
        let max_center = self.tuning.ground_line() - self.gap_height / 2.0;
        let gap_center_y = self.rng.random_range(min_center..max_center);

        let x = self.tuning.field_width + self.tuning.spawn_lead;
        log::debug!("spawn obstacle at x={x} gap_center={gap_center_y:.1}");
        self.obstacles.push(Obstacle::new(
            x,
            gap_center_y,
            self.gap_height,
            self.speed,
            self.tuning.ground_line(),
        ));
    }

    /// Tighten the tunables one notch, each clamped to its floor/ceiling.
    /// Keyed to the scoring event, so a score sitting on a milestone cannot
    /// re-trigger it every frame.
    pub fn escalate_difficulty(&mut self) {
        self.speed = (self.speed + self.tuning.speed_step).min(self.tuning.max_speed);
        self.gap_height = (self.gap_height - self.tuning.gap_step).max(self.tuning.min_gap_height);
        self.spawn_interval =
            (self.spawn_interval - self.tuning.interval_step).max(self.tuning.min_spawn_interval);
        log::info!(
            "difficulty raised at score {}: speed={} gap={} interval={:.2}",
            self.score,
            self.speed,
            self.gap_height,
            self.spawn_interval
        );
    }
}
