//! Skydash - a side-scrolling avoider game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor, obstacles, per-frame tick)
//! - `tuning`: Data-driven game balance and configuration

pub mod sim;
pub mod tuning;

pub use tuning::{Difficulty, Tuning, TuningError};

/// Game behavior constants
///
/// Fixed characteristics of the actor and obstacles. Anything meant to be
/// balanced per difficulty lives in [`tuning::Tuning`] instead.
pub mod consts {
    /// Upper bound on a single frame delta (seconds). A stalled frame is
    /// clamped to this so the actor cannot tunnel through an obstacle.
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Actor collision half-extents (the drawn body is larger)
    pub const ACTOR_HALF_WIDTH: f32 = 22.0;
    pub const ACTOR_HALF_HEIGHT: f32 = 18.0;

    /// Rotation target is velocity scaled by this factor (degrees per px/s)
    pub const ROTATION_VELOCITY_SCALE: f32 = 0.05;
    /// Rotation clamp while airborne (degrees)
    pub const ROTATION_MIN: f32 = -30.0;
    pub const ROTATION_MAX: f32 = 90.0;
    /// First-order rotation approach rates (per second)
    pub const ROTATION_RATE_FLAPPING: f32 = 20.0;
    pub const ROTATION_RATE_DEFAULT: f32 = 8.0;
    /// Angular rate of the death spin (degrees per second)
    pub const DEAD_SPIN_RATE: f32 = 280.0;

    /// Flapping hands off to gliding after this long (seconds)
    pub const FLAP_DURATION: f32 = 0.15;
    /// Gliding tips into falling once descent is faster than this (px/s)
    pub const FALL_VELOCITY_THRESHOLD: f32 = 100.0;
    /// Celebration length (seconds); a cosmetic overlay on normal flight
    pub const CELEBRATE_DURATION: f32 = 0.5;

    /// Base wing animation period (seconds)
    pub const WING_ANIM_PERIOD: f32 = 0.08;
    /// Idle (menu) wing cycle period (seconds)
    pub const WING_IDLE_PERIOD: f32 = 0.2;

    /// Obstacle body width
    pub const OBSTACLE_WIDTH: f32 = 72.0;
    /// Cap lip height
    pub const OBSTACLE_CAP_HEIGHT: f32 = 28.0;
    /// Cap lip overhang past the body on each side
    pub const OBSTACLE_CAP_OVERHANG: f32 = 6.0;
}

/// First-order approach of `current` toward `target` at `rate` per second.
///
/// The step is capped so a large dt cannot overshoot the target.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * (rate * dt).min(1.0)
}
