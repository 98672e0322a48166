//! Game state and core simulation types
//!
//! Everything the per-tick update touches lives here. The sim is pure:
//! no I/O, no clocks, no platform types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Showcase backdrop and blinking title, waiting for input
    Start,
    /// Active gameplay
    Playing,
    /// Round over, waiting for replay input
    GameOver,
}

/// Brick row color, doubling as the sprite key for the row group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickColor {
    Blue,
    Green,
    Red,
}

/// What kind of static collider an obstacle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Brick(BrickColor),
    Paddle,
}

/// A static rectangular collider (brick or paddle)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub rect: Rect,
}

/// The moving collider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per tick
    pub vel: Vec2,
}

impl Ball {
    /// Spawn at the fixed round start position with the default velocity
    pub fn spawn() -> Self {
        Self {
            rect: Rect::from_center(
                Vec2::new(SCREEN_WIDTH / 2.0, BALL_START_Y),
                Vec2::splat(BALL_SIZE),
            ),
            vel: Vec2::new(BALL_START_VX, BALL_START_VY),
        }
    }

    /// Advance one tick and bounce off the side walls.
    ///
    /// Only x is constrained here. The ceiling and floor are the collision
    /// resolver's business, so a ball above the top margin or below the
    /// bottom edge passes through unchanged.
    pub fn advance(&mut self, left_bound: f32, right_bound: f32) {
        self.rect.min += self.vel;

        if self.rect.min.x < left_bound {
            self.rect.min.x = left_bound;
            self.vel.x = -self.vel.x;
        } else if self.rect.min.x > right_bound {
            self.rect.min.x = right_bound;
            self.vel.x = -self.vel.x;
        }
    }
}

/// One-shot outcome of a tick, observed by the driver (audio cues, round end)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the paddle
    PaddleBounce,
    /// A brick was struck and removed
    BrickBroken,
    /// Ball bounced off the top margin (and sped up)
    CeilingBounce,
    /// Ball passed the bottom edge; the round is over
    RoundLost,
}

/// The live collection of obstacles for the current round.
///
/// Obstacles are keyed by id, so removing one never invalidates handles to
/// the others. Insertion order is the layout order and doubles as the
/// (arbitrary but deterministic) collision scan order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Field {
    obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an obstacle, returning its handle
    pub fn add(&mut self, kind: ObstacleKind, rect: Rect) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle { id, kind, rect });
        id
    }

    /// Remove by identity. Returns false if the id is not present.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.id != id);
        self.obstacles.len() != before
    }

    pub fn get(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn brick_count(&self) -> usize {
        self.obstacles
            .iter()
            .filter(|o| matches!(o.kind, ObstacleKind::Brick(_)))
            .count()
    }

    /// The paddle, if one is in play
    pub fn paddle(&self) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.kind == ObstacleKind::Paddle)
    }

    pub fn paddle_mut(&mut self) -> Option<&mut Obstacle> {
        self.obstacles
            .iter_mut()
            .find(|o| o.kind == ObstacleKind::Paddle)
    }
}

/// Complete brick-game state for one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub level: u32,
    pub field: Field,
    pub ball: Ball,
    pub phase: GamePhase,
    /// Logical screen size for bound checks
    pub screen: Vec2,
}

impl GameState {
    /// Fresh round: full brick layout for `level` plus a paddle, ball at the
    /// start position, score zeroed.
    pub fn new_round(level: u32, screen_height: f32) -> Self {
        let screen = Vec2::new(SCREEN_WIDTH, screen_height);
        let mut field = Field::level(level);
        field.add_paddle(screen_height);
        Self {
            score: 0,
            level,
            field,
            ball: Ball::spawn(),
            phase: GamePhase::Playing,
            screen,
        }
    }
}
