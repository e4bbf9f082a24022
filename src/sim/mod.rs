//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Frame deltas clamped at the tick boundary
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod obstacle;
pub mod rect;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorState, WingPhase};
pub use obstacle::Obstacle;
pub use rect::Aabb;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
