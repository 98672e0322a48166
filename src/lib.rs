//! Break the Ceiling - two small single-screen arcade games
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, obstacle field, collisions)
//! - `app`: Screen state machine driving the sim through injected capabilities
//! - `assets`: Startup-time resolution of sprite/sound names to handles
//! - `audio`: Fire-and-forget sound cue sink
//! - `settings`: User preferences persisted as JSON

pub mod app;
pub mod assets;
pub mod audio;
pub mod settings;
pub mod sim;

pub use settings::{Settings, Variant};

use std::time::Duration;

/// Game configuration constants
pub mod consts {
    /// Logical screen width shared by both variants
    pub const SCREEN_WIDTH: f32 = 480.0;
    /// Brick-game screen height
    pub const BREAKOUT_SCREEN_HEIGHT: f32 = 700.0;
    /// Skiing-game screen height
    pub const SKI_SCREEN_HEIGHT: f32 = 800.0;

    /// Brick-game tick rate
    pub const BREAKOUT_FPS: u32 = 15;
    /// Skiing-game tick rate
    pub const SKI_FPS: u32 = 30;

    /// Margin between the playfield and the screen edges
    pub const BORDER: f32 = 5.0;

    /// Brick sprite dimensions
    pub const BRICK_WIDTH: f32 = 45.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Gap between adjacent bricks, both axes
    pub const BRICK_GAP: f32 = 2.0;
    /// Bricks per sub-row
    pub const BRICK_COLS: u32 = 10;
    /// Sub-rows per color group
    pub const BRICK_SUB_ROWS: u32 = 4;
    /// Center y of the topmost brick sub-row
    pub const FIRST_ROW_Y: f32 = 72.0;

    /// Ball sprite is square
    pub const BALL_SIZE: f32 = 16.0;
    /// Ball spawn center y (spawn x is mid-screen)
    pub const BALL_START_Y: f32 = 300.0;
    /// Ball spawn velocity components, pixels per tick
    pub const BALL_START_VX: f32 = 5.0;
    pub const BALL_START_VY: f32 = 5.0;

    /// Paddle sprite dimensions
    pub const PADDLE_WIDTH: f32 = 64.0;
    pub const PADDLE_HEIGHT: f32 = 16.0;
    /// Paddle center sits this far above the bottom edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;

    /// Vertical speed multiplier applied on every ceiling bounce.
    /// Compounds without limit; the escalation is the difficulty curve.
    pub const CEILING_SPEEDUP: f32 = 1.5;
    /// Points per broken brick
    pub const BRICK_POINTS: u32 = 10;

    /// Level used for the start-screen backdrop (all three color groups)
    pub const SHOWCASE_LEVEL: u32 = 10;

    /// Title/prompt blink half-period on the menu screens
    pub const BLINK_MS: u64 = 500;

    /// Skier horizontal clamp range
    pub const SKIER_MIN_X: f32 = 20.0;
    pub const SKIER_MAX_X: f32 = 620.0;
    /// Skier angle clamp (turn units either side of straight)
    pub const SKIER_MAX_ANGLE: i32 = 2;
}

/// Duration of one tick at the given rate
#[inline]
pub fn tick_interval(fps: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(fps.max(1)))
}
