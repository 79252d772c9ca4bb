//! Audio cues
//!
//! Playback is the host's job. Steps queue [`SoundEffect`]s and the scene
//! controller hands them to an [`AudioSink`] after the tick.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Background music, loops forever once started
    Bgm,
    /// Countdown finished, run begins
    Start,
    /// Run budget elapsed
    End,
}

impl SoundEffect {
    pub fn is_looping(self) -> bool {
        matches!(self, SoundEffect::Bgm)
    }

    /// Asset file the host should play
    pub fn asset_name(self) -> &'static str {
        match self {
            SoundEffect::Bgm => "bgm.ogg",
            SoundEffect::Start => "start.wav",
            SoundEffect::End => "end.wav",
        }
    }

    /// Mix level baked into the cue
    pub fn base_volume(self) -> f32 {
        0.8
    }
}

/// Fire-and-forget audio trigger
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that only logs; the native build has no mixer
#[derive(Debug, Clone)]
pub struct LogAudio {
    settings: Settings,
}

impl LogAudio {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.settings.effective_volume(effect);
        if vol <= 0.0 {
            log::debug!("{:?} muted", effect);
            return;
        }
        log::info!(
            "play {} at {:.2}{}",
            effect.asset_name(),
            vol,
            if effect.is_looping() { " (loop)" } else { "" }
        );
    }
}

/// Sink that remembers every cue, for tests and replays
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub played: Vec<SoundEffect>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }
}
