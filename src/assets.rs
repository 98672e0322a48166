//! Startup-time asset resolution
//!
//! Logical names are resolved to opaque handles exactly once, before the
//! first screen. A missing asset is fatal: the error propagates to `main`
//! and the process exits. Nothing in the game loop loads assets.

use anyhow::{Context, Result};

use crate::sim::{BrickColor, ObstacleKind};

/// Handle to a loaded, drawable image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// Handle to a loaded, playable sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u32);

/// Resolves logical asset names to handles. Implemented by the platform
/// layer; the loader is only consulted during setup.
pub trait AssetLoader {
    fn load_image(&mut self, name: &str) -> Result<ImageHandle>;
    fn load_sound(&mut self, name: &str) -> Result<SoundHandle>;
}

/// Every handle the brick game draws or plays, resolved up front
#[derive(Debug, Clone)]
pub struct SpriteSet {
    pub brick_blue: ImageHandle,
    pub brick_green: ImageHandle,
    pub brick_red: ImageHandle,
    pub paddle: ImageHandle,
    pub ball: ImageHandle,
    pub brick_break: SoundHandle,
}

impl SpriteSet {
    pub fn load(loader: &mut dyn AssetLoader) -> Result<Self> {
        Ok(Self {
            brick_blue: loader.load_image("blue.png").context("brick sprite")?,
            brick_green: loader.load_image("green.png").context("brick sprite")?,
            brick_red: loader.load_image("red.png").context("brick sprite")?,
            paddle: loader.load_image("paddle.png").context("paddle sprite")?,
            ball: loader.load_image("ball.png").context("ball sprite")?,
            brick_break: loader.load_sound("whistleup.wav").context("break cue")?,
        })
    }

    /// Image for a field obstacle
    pub fn for_obstacle(&self, kind: ObstacleKind) -> ImageHandle {
        match kind {
            ObstacleKind::Brick(BrickColor::Blue) => self.brick_blue,
            ObstacleKind::Brick(BrickColor::Green) => self.brick_green,
            ObstacleKind::Brick(BrickColor::Red) => self.brick_red,
            ObstacleKind::Paddle => self.paddle,
        }
    }
}
