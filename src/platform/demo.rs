//! Headless demo session
//!
//! The auto typist plays a seeded session against a recording sink. The native
//! binary runs this and prints the summary.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::{FramePacer, ScriptedInput, run_frame};
use crate::error::ConfigError;
use crate::renderer::{DrawCommand, RecordingSink, Renderer};
use crate::settings::Settings;
use crate::sim::{AutoTypist, GamePhase, Session, TickOutcome};

/// Stop the demo after this many frames even if the typist keeps up
pub const MAX_DEMO_TICKS: u64 = 5 * 60 * 60;
/// Auto typist reaction time (ticks between keystrokes)
const TYPIST_REACTION_TICKS: u32 = 24;
/// Auto typist wrong-key probability
const TYPIST_TYPO_CHANCE: f64 = 0.25;

/// How a demo session is driven
#[derive(Debug, Clone, Copy)]
pub struct DemoOptions {
    pub seed: u64,
    pub max_ticks: u64,
    /// Pace frames at `Settings::target_fps` instead of running flat out
    pub realtime: bool,
}

/// Outcome of a demo session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoSummary {
    pub seed: u64,
    pub ticks: u64,
    pub hits: u32,
    pub misses: u32,
    pub phase: GamePhase,
    pub final_frame: Vec<DrawCommand>,
}

/// Play one session until game over or `max_ticks`
pub fn run_demo(settings: &Settings, options: DemoOptions) -> Result<DemoSummary, ConfigError> {
    let DemoOptions {
        seed,
        max_ticks,
        realtime,
    } = options;

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut session = Session::new(settings)?;
    let mut renderer = Renderer::new(RecordingSink::default());
    let mut input = ScriptedInput::new();
    let mut typist = AutoTypist::new(
        seed.wrapping_add(1),
        TYPIST_REACTION_TICKS,
        TYPIST_TYPO_CHANCE,
    );
    let mut pacer = if realtime {
        FramePacer::new(settings.target_fps)
    } else {
        FramePacer::unlimited()
    };

    while !session.is_over() && session.time_ticks() < max_ticks {
        if let Some(board) = session.board()
            && let Some(key) = typist.next_key(board)
        {
            input.push_text(key.encode_utf8(&mut [0u8; 4]));
        }

        if run_frame(&mut session, &mut input, &mut renderer, &mut rng)
            == TickOutcome::CloseRequested
        {
            break;
        }
        pacer.wait();
    }

    if !session.is_over() {
        log::info!("Demo stopped after {} ticks", session.time_ticks());
    }

    let score = session.score();
    Ok(DemoSummary {
        seed,
        ticks: session.time_ticks(),
        hits: score.hits,
        misses: score.misses,
        phase: session.phase(),
        final_frame: renderer.sink().last_frame().to_vec(),
    })
}
