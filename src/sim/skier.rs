//! Skiing-variant steering core
//!
//! The skiing game shares the field/loop architecture with the brick game;
//! what is unique to it is steering: a continuous tilt reading thresholded
//! into one of five discrete turn commands, and a skier whose turn angle
//! trades horizontal drift against descent speed. This logic is platform
//! independent - the accelerometer itself is an injected collaborator.

use glam::Vec2;

use crate::consts::*;

/// Discrete steering command derived from a tilt reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnCommand {
    HardLeft,
    Left,
    Straight,
    Right,
    HardRight,
}

impl TurnCommand {
    /// Threshold a raw accelerometer reading (device x axis) into a command.
    ///
    /// Dead zones at exactly +/-1 and +/-3 return `None` and leave the
    /// current angle alone. Tilting toward positive x steers left.
    pub fn from_tilt(x: f32) -> Option<TurnCommand> {
        if x.abs() < 1.0 {
            Some(TurnCommand::Straight)
        } else if x > 3.0 {
            Some(TurnCommand::HardLeft)
        } else if x > 1.0 {
            Some(TurnCommand::Left)
        } else if x < -3.0 {
            Some(TurnCommand::HardRight)
        } else if x < -1.0 {
            Some(TurnCommand::Right)
        } else {
            None
        }
    }

    /// Target turn angle for this command
    pub fn angle(self) -> i32 {
        match self {
            TurnCommand::HardLeft => -2,
            TurnCommand::Left => -1,
            TurnCommand::Straight => 0,
            TurnCommand::Right => 1,
            TurnCommand::HardRight => 2,
        }
    }
}

/// The player's skier
#[derive(Debug, Clone)]
pub struct Skier {
    /// Horizontal center position
    pub center_x: f32,
    /// Turn angle, clamped to [-SKIER_MAX_ANGLE, SKIER_MAX_ANGLE]
    pub angle: i32,
}

impl Skier {
    pub fn new(center_x: f32) -> Self {
        Self { center_x, angle: 0 }
    }

    /// Set the turn angle (clamped) and return the per-tick speed:
    /// x drift equals the angle, descent slows by 2 per turn unit.
    pub fn set_angle(&mut self, angle: i32) -> Vec2 {
        self.angle = angle.clamp(-SKIER_MAX_ANGLE, SKIER_MAX_ANGLE);
        Vec2::new(self.angle as f32, (6 - self.angle.abs() * 2) as f32)
    }

    /// Relative turn, for keyboard steering
    pub fn turn(&mut self, direction: i32) -> Vec2 {
        self.set_angle(self.angle + direction)
    }

    /// Apply a thresholded tilt command
    pub fn steer(&mut self, command: TurnCommand) -> Vec2 {
        self.set_angle(command.angle())
    }

    /// Drift horizontally by the given speed, clamped to the course edges
    pub fn advance(&mut self, speed: Vec2) {
        self.center_x = (self.center_x + speed.x).clamp(SKIER_MIN_X, SKIER_MAX_X);
    }
}
