//! Collision detection and response
//!
//! Broad-phase is a plain AABB scan over the obstacle field; the first
//! overlap in field order wins and at most one obstacle is resolved per
//! tick. Remaining overlaps get picked up on later ticks, since a removed
//! brick cannot re-collide.
//!
//! The ceiling and floor checks are independent of the obstacle scan: a
//! tick may bounce off the paddle *and* the ceiling.

use super::rect::Rect;
use super::state::{Field, GameEvent, GameState, ObstacleKind};
use crate::consts::*;

/// First obstacle overlapping `ball`, in field iteration order
pub fn first_overlap(ball: &Rect, field: &Field) -> Option<(u32, ObstacleKind)> {
    field
        .iter()
        .find(|o| o.rect.intersects(ball))
        .map(|o| (o.id, o.kind))
}

/// Resolve all collision effects for the current tick.
///
/// Mutates ball velocity, score, and the field; pushes a [`GameEvent`] for
/// every effect so the driver can cue audio and end the round. Does not
/// change `state.phase` - that is the tick loop's call.
pub fn resolve(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if let Some((id, kind)) = first_overlap(&state.ball.rect, &state.field) {
        match kind {
            ObstacleKind::Paddle => {
                state.ball.vel.y = -state.ball.vel.y;
                events.push(GameEvent::PaddleBounce);
            }
            ObstacleKind::Brick(_) => {
                state.ball.vel.y = -state.ball.vel.y;
                state.score += BRICK_POINTS;
                state.field.remove(id);
                events.push(GameEvent::BrickBroken);
            }
        }
    }

    // Ceiling: magnitude scales first, then the sign flips, so every
    // ceiling bounce makes the ball faster.
    if state.ball.rect.min.y < BORDER {
        state.ball.vel.y = -(state.ball.vel.y * CEILING_SPEEDUP);
        events.push(GameEvent::CeilingBounce);
    }

    // Floor: past the bottom edge the round is unrecoverable.
    if state.ball.rect.min.y > state.screen.y {
        events.push(GameEvent::RoundLost);
    }
}
