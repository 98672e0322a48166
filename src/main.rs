//! Break the Ceiling entry point
//!
//! No windowing backend is wired in yet; the binary runs a headless demo
//! round so the full sim path is exercisable from the command line. A real
//! frontend supplies `Surface`/`InputSource`/`AudioSink` implementations
//! and calls `App::run`.

use std::path::Path;

use ceiling_break::Settings;
use ceiling_break::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    log::info!(
        "Break the Ceiling starting ({} variant, {} Hz)",
        settings.variant.as_str(),
        settings.variant.fps()
    );
    log::info!("no windowing backend wired in - running a headless demo round");

    demo_round(settings.variant.screen_height());
}

/// Run one round with a paddle that shadows the ball, up to a tick budget.
fn demo_round(screen_height: f32) {
    const TICK_BUDGET: u32 = 20_000;

    let mut state = GameState::new_round(0, screen_height);
    let mut ticks = 0;
    while state.phase == GamePhase::Playing && ticks < TICK_BUDGET {
        let input = TickInput {
            pointer_x: Some(state.ball.rect.min.x),
        };
        for event in tick(&mut state, &input) {
            log::debug!("tick {ticks}: {event:?}");
        }
        ticks += 1;
    }

    println!(
        "demo round: {} ticks, score {}, {} bricks left, phase {:?}",
        ticks,
        state.score,
        state.field.brick_count(),
        state.phase
    );
}
