//! Data-driven game balance
//!
//! Everything a designer might retune lives here: playfield geometry, flight
//! feel, the per-difficulty (speed, gap, spawn interval) triples, and the
//! escalation schedule. Fixed behavioral constants stay in [`crate::consts`].
//!
//! A `Tuning` is validated once, before the simulation is built; the sim can
//! then spawn forever without re-checking geometry.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Selectable difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Starting tunables for one difficulty level
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelPreset {
    /// Obstacle scroll speed (px/s)
    pub speed: f32,
    /// Corridor height (px)
    pub gap_height: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
}

/// A rejected configuration
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// Playfield or ground geometry is degenerate
    BadDimensions,
    /// A value that must be strictly positive is not
    NonPositive(&'static str),
    /// A preset's corridor cannot fit the playable area
    GapTooLarge(Difficulty),
    /// No admissible gap-center position exists for a preset
    EmptySpawnBand(Difficulty),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::BadDimensions => write!(f, "playfield dimensions are degenerate"),
            TuningError::NonPositive(what) => write!(f, "{what} must be positive"),
            TuningError::GapTooLarge(d) => {
                write!(f, "{} gap height exceeds the playable area", d.as_str())
            }
            TuningError::EmptySpawnBand(d) => {
                write!(f, "{} preset leaves no room to place a gap center", d.as_str())
            }
        }
    }
}

impl std::error::Error for TuningError {}

/// Complete balance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield width (px)
    pub field_width: f32,
    /// Playfield height including the ground strip (px)
    pub field_height: f32,
    /// Height of the ground strip at the bottom
    pub ground_height: f32,

    /// Downward acceleration (px/s^2)
    pub gravity: f32,
    /// Velocity set by an impulse; negative is upward
    pub impulse_strength: f32,
    /// Actor start position as fractions of the playfield
    pub start_x_fraction: f32,
    pub start_y_fraction: f32,

    /// Horizontal lead past the right boundary where obstacles spawn
    pub spawn_lead: f32,
    /// Smallest admissible gap-center y
    pub min_gap_center: f32,

    /// Score multiple that triggers a difficulty escalation
    pub escalate_every: u32,
    /// Score multiple that triggers a celebration
    pub celebrate_every: u32,
    /// Escalation steps, each clamped to its floor/ceiling
    pub speed_step: f32,
    pub max_speed: f32,
    pub gap_step: f32,
    pub min_gap_height: f32,
    pub interval_step: f32,
    pub min_spawn_interval: f32,

    pub easy: LevelPreset,
    pub normal: LevelPreset,
    pub hard: LevelPreset,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: 600.0,
            field_height: 800.0,
            ground_height: 80.0,

            gravity: 1500.0,
            impulse_strength: -520.0,
            start_x_fraction: 0.25,
            start_y_fraction: 0.4,

            spawn_lead: 20.0,
            min_gap_center: 140.0,

            escalate_every: 10,
            celebrate_every: 5,
            speed_step: 5.0,
            max_speed: 320.0,
            gap_step: 3.0,
            min_gap_height: 110.0,
            interval_step: 0.05,
            min_spawn_interval: 1.5,

            easy: LevelPreset {
                speed: 120.0,
                gap_height: 220.0,
                spawn_interval: 3.0,
            },
            normal: LevelPreset {
                speed: 160.0,
                gap_height: 185.0,
                spawn_interval: 2.4,
            },
            hard: LevelPreset {
                speed: 210.0,
                gap_height: 145.0,
                spawn_interval: 2.0,
            },
        }
    }
}

impl Tuning {
    /// Starting tunables for a difficulty level
    pub fn preset(&self, difficulty: Difficulty) -> LevelPreset {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }

    /// Bottom of the playable area (top of the ground strip)
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.field_height - self.ground_height
    }

    /// Actor start/reset position
    pub fn start_position(&self) -> Vec2 {
        Vec2::new(
            self.field_width * self.start_x_fraction,
            self.field_height * self.start_y_fraction,
        )
    }

    /// Reject degenerate configurations up front, so spawning can never
    /// produce a corridor that clips the playfield edges.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.field_width > 0.0
            && self.field_height > 0.0
            && self.ground_height >= 0.0
            && self.ground_height < self.field_height)
        {
            return Err(TuningError::BadDimensions);
        }
        if self.gravity <= 0.0 {
            return Err(TuningError::NonPositive("gravity"));
        }
        if self.min_gap_height <= 0.0 {
            return Err(TuningError::NonPositive("min_gap_height"));
        }
        if self.min_spawn_interval <= 0.0 {
            return Err(TuningError::NonPositive("min_spawn_interval"));
        }

        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let preset = self.preset(difficulty);
            if preset.speed <= 0.0 {
                return Err(TuningError::NonPositive("speed"));
            }
            if preset.spawn_interval <= 0.0 {
                return Err(TuningError::NonPositive("spawn_interval"));
            }
            if preset.gap_height <= 0.0 {
                return Err(TuningError::NonPositive("gap_height"));
            }
            // The corridor must fit between the ceiling and the ground line
            if preset.gap_height >= self.ground_line() {
                return Err(TuningError::GapTooLarge(difficulty));
            }
            // Both barriers stay non-negative for every admissible center.
            // Escalation only shrinks the gap, so the starting value is the
            // binding case.
            let min_center = self.min_gap_center;
            let max_center = self.ground_line() - preset.gap_height / 2.0;
            if min_center < preset.gap_height / 2.0 || min_center >= max_center {
                return Err(TuningError::EmptySpawnBand(difficulty));
            }
        }
        Ok(())
    }
}
