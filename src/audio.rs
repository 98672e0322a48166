//! Fire-and-forget audio cues
//!
//! The sim never observes audio; the app loop maps tick events to effects
//! and hands them to whatever sink was injected at startup.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A brick shattered
    BrickBreak,
}

impl SoundEffect {
    /// The cue for a tick event, if that event makes a sound
    pub fn for_event(event: GameEvent) -> Option<SoundEffect> {
        match event {
            GameEvent::BrickBroken => Some(SoundEffect::BrickBreak),
            GameEvent::PaddleBounce | GameEvent::CeilingBounce | GameEvent::RoundLost => None,
        }
    }
}

/// Playback capability. `play` has no observable result; a sink that fails
/// mid-game simply drops cues.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that swallows every cue (headless runs, muted play)
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}
