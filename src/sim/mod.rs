//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Stable obstacle iteration order (layout order)
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod field;
pub mod rect;
pub mod skier;
pub mod state;
pub mod tick;

pub use collision::{first_overlap, resolve};
pub use rect::Rect;
pub use skier::{Skier, TurnCommand};
pub use state::{
    Ball, BrickColor, Field, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind,
};
pub use tick::{TickInput, tick};
