//! Fixed timestep simulation tick
//!
//! Per-tick order: apply input, advance the ball, resolve collisions.
//! Rendering and audio happen outside the sim, driven by the returned
//! events.

use super::collision;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest pointer x, if the pointer moved this tick. Drives the paddle
    /// directly - no smoothing, no paddle velocity.
    pub pointer_x: Option<f32>,
}

/// Advance the game by one tick. Only the Playing phase simulates; menu
/// phases are driven entirely by the app loop.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    if state.phase != GamePhase::Playing {
        return Vec::new();
    }

    if let Some(x) = input.pointer_x {
        if let Some(paddle) = state.field.paddle_mut() {
            paddle.rect.min.x = x;
        }
    }

    state.ball.advance(BORDER, state.screen.x - BORDER);

    let mut events = Vec::new();
    collision::resolve(state, &mut events);

    if events.contains(&GameEvent::RoundLost) {
        state.phase = GamePhase::GameOver;
    }

    events
}
