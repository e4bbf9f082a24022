//! Per-frame simulation step
//!
//! `tick` advances the whole game by one frame. The playing-phase sequence is
//! fixed: advance actor, advance obstacles, spawn, score, prune, collide.
//! Reordering it changes observable behavior (whether an obstacle can be both
//! scored and collided with on the same frame), so it must stay as is.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::MAX_FRAME_DT;
use crate::tuning::Difficulty;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (tap/space)
    pub impulse: bool,
    /// Leave the menu and start a run
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
    /// Restart after game over
    pub restart: bool,
    /// Difficulty selection (menu only)
    pub difficulty: Option<Difficulty>,
}

/// Advance the game state by one frame.
///
/// `dt` is wall-clock seconds, clamped here to [0, 0.05] so a stalled frame
/// cannot make the actor tunnel through a collision surface.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    state.events.clear();

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }
    if state.phase == GamePhase::Paused {
        return;
    }

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu => {
            if let Some(difficulty) = input.difficulty {
                state.set_difficulty(difficulty);
            }
            // Zero delta keeps the actor hovering; only the wings move
            state.actor.advance(0.0);
            state.actor.animate_wing(dt);

            if input.start {
                state.reset_run();
                state.phase = GamePhase::Playing;
                log::info!("run started ({})", state.difficulty.as_str());
            }
        }
        GamePhase::Playing => step_playing(state, input, dt),
        GamePhase::GameOver => {
            // The dead actor keeps tumbling behind the game-over screen
            state.actor.advance(dt);
            if input.restart {
                state.reset_run();
                state.phase = GamePhase::Playing;
                log::info!("run restarted ({})", state.difficulty.as_str());
            }
        }
        GamePhase::Paused => {}
    }
}

/// One frame of active gameplay, in the fixed sequence
fn step_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    // 1. Actor
    if input.impulse && !state.actor.is_dead() {
        state.actor.impulse();
        state.events.push(GameEvent::Flapped);
    }
    state.actor.advance(dt);

    // 2. Obstacles
    for obstacle in &mut state.obstacles {
        obstacle.advance(dt);
    }

    // 3. Spawn
    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval {
        state.spawn_timer = 0.0;
        state.spawn_obstacle();
    }

    // 4. Pass detection and scoring, in spawn order. Escalation and
    //    celebration key off the scoring event itself.
    let actor_x = state.actor.position.x;
    for i in 0..state.obstacles.len() {
        if state.obstacles[i].has_passed(actor_x) {
            state.obstacles[i].mark_passed();
            state.score += 1;
            if state.score > state.high_score {
                state.high_score = state.score;
            }
            state.events.push(GameEvent::Scored {
                total: state.score,
            });

            if state.score.is_multiple_of(state.tuning.escalate_every) {
                state.escalate_difficulty();
                state.events.push(GameEvent::DifficultyRaised);
            }
            if state.score.is_multiple_of(state.tuning.celebrate_every) {
                state.actor.celebrate();
            }
        }
    }

    // 5. Prune obstacles fully past the left boundary
    state.obstacles.retain(|o| !o.is_offscreen());

    // 6. Collisions and playfield bounds. Obstacle or ceiling contact only
    //    kills; the phase itself ends at the ground.
    let bounds = state.actor.bounding_box();
    if !state.actor.is_dead() {
        let hit_obstacle = state.obstacles.iter().any(|o| o.collides_with(&bounds));
        if hit_obstacle || state.actor.position.y < 0.0 {
            state.actor.kill();
            state.events.push(GameEvent::Died);
            log::info!("died at score {}", state.score);
        }
    }
    if state.actor.position.y >= state.tuning.ground_line() {
        if !state.actor.is_dead() {
            state.actor.kill();
            state.events.push(GameEvent::Died);
        }
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!("run over: score={} best={}", state.score, state.high_score);
    }
}
