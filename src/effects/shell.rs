//! Page-shell effects capability.
//!
//! Background audio and confetti are owned by the page shell, not by any
//! section; sections receive this capability explicitly instead of reaching
//! for globals. Calls are fire-and-forget with no return value to inspect.

use crate::effects::confetti::ConfettiConfig;

/// Shell-owned effects exposed to sections.
pub trait PageEffects {
    /// Start (or restart) the looping background track.
    fn play_background_audio(&mut self, source: &str);

    /// Fire one confetti shot.
    fn burst_confetti(&mut self, config: ConfettiConfig);
}

/// Silent shell used when no effects host is available; every call degrades
/// to a no-op, matching how the page behaves without a browser canvas.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEffects;

impl PageEffects for NullEffects {
    fn play_background_audio(&mut self, _source: &str) {}

    fn burst_confetti(&mut self, _config: ConfettiConfig) {}
}

/// Test shell that records every call it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingEffects {
    pub audio_plays: Vec<String>,
    pub confetti_bursts: Vec<ConfettiConfig>,
}

impl PageEffects for RecordingEffects {
    fn play_background_audio(&mut self, source: &str) {
        self.audio_plays.push(source.to_string());
    }

    fn burst_confetti(&mut self, config: ConfettiConfig) {
        self.confetti_bursts.push(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_shell_captures_calls() {
        let mut shell = RecordingEffects::default();
        shell.play_background_audio("music/track.mp3");
        assert_eq!(shell.audio_plays, vec!["music/track.mp3".to_string()]);
    }

    #[test]
    fn null_shell_accepts_everything() {
        let mut shell = NullEffects;
        shell.play_background_audio("music/track.mp3");
        // No panic, no observable effect.
    }
}
