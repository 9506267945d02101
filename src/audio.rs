//! Sound cues
//!
//! The simulation fires named cues and never waits on them. Whatever sits
//! behind an `AudioSink` may play a sample, log it, or drop it; a missing
//! audio device is just a sink that does nothing.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits a wall, the ceiling or the bat
    Bounce,
    /// Ball lands a scoring hit on a brick
    BrickHit,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Bounce => "bounce",
            SoundEffect::BrickHit => "brick-hit",
        }
    }
}

/// Fire-and-forget receiver for sound cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Writes every cue to the log at trace level
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    muted: bool,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        log::trace!("sfx: {}", effect.as_str());
    }
}

/// Records cues in order
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}
