//! Skydash entry point
//!
//! Headless demo: runs the simulation at a fixed 60 Hz with a small
//! height-hold autopilot and logs the events a front end would turn into
//! audio and HUD updates. Optional args: a tuning JSON file and a seed.

use std::env;
use std::error::Error;
use std::fs;

use skydash::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use skydash::tuning::Tuning;

const DT: f32 = 1.0 / 60.0;
/// Demo stops after two simulated minutes even if the autopilot survives
const MAX_TICKS: u64 = 120 * 60;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let tuning: Tuning = match args.next() {
        Some(path) => serde_json::from_str(&fs::read_to_string(&path)?)?,
        None => Tuning::default(),
    };
    let seed: u64 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 0xC0FFEE,
    };

    let mut state = GameState::new(tuning, seed)?;
    log::info!("skydash demo starting (seed {seed})");

    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, DT);

    let flap = TickInput {
        impulse: true,
        ..Default::default()
    };
    let idle = TickInput::default();

    let mut ticks: u64 = 0;
    while state.phase == GamePhase::Playing && ticks < MAX_TICKS {
        // Aim for the center of the next unclaimed gap
        let target = state
            .obstacles
            .iter()
            .find(|o| !o.passed())
            .map(|o| o.gap_center_y)
            .unwrap_or(state.tuning.field_height * 0.45);
        let input = if state.actor.position.y > target {
            &flap
        } else {
            &idle
        };
        tick(&mut state, input, DT);
        ticks += 1;

        for event in &state.events {
            match event {
                GameEvent::Scored { total } => log::info!("score: {total}"),
                GameEvent::DifficultyRaised => log::info!(
                    "difficulty raised: speed={} gap={} interval={:.2}",
                    state.speed,
                    state.gap_height,
                    state.spawn_interval
                ),
                GameEvent::Died => log::info!("actor died"),
                GameEvent::GameOver => log::info!("game over"),
                GameEvent::Flapped => log::trace!("flap"),
            }
        }
    }

    println!(
        "final score: {} (best {}) after {:.1}s",
        state.score,
        state.high_score,
        ticks as f32 * DT
    );
    Ok(())
}
