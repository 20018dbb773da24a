//! Confetti burst configuration.
//!
//! The actual particle effect is an external collaborator; this module only
//! describes the burst it should perform and the cadence of repeated shots.

use crate::foundation::core::Fps;
use crate::foundation::seeded::Rng64;

/// One confetti shot handed to the page shell.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConfettiConfig {
    pub particle_count: u32,
    pub start_velocity: f64,
    pub spread_deg: f64,
    pub ticks: u32,
    /// Launch origin as fractions of the viewport (x right, y down).
    pub origin: (f64, f64),
    pub colors: Vec<String>,
}

/// Celebration palette used by every burst on the page.
pub const CONFETTI_COLORS: [&str; 5] = ["#ec4899", "#d946ef", "#8b5cf6", "#f9a8d4", "#c084fc"];

fn colors() -> Vec<String> {
    CONFETTI_COLORS.iter().map(|c| (*c).to_string()).collect()
}

/// The gift-box celebration: paired shots from both sides of the viewport,
/// every 250 ms for 3 seconds, tapering off as time runs out.
#[derive(Clone, Debug)]
pub struct ConfettiSchedule {
    duration_frames: u64,
    cadence_frames: u64,
    rng: Rng64,
}

impl ConfettiSchedule {
    pub const DURATION_S: f64 = 3.0;
    pub const CADENCE_S: f64 = 0.25;
    const BASE_COUNT: f64 = 50.0;

    pub fn new(fps: Fps, seed: u64) -> Self {
        Self {
            duration_frames: fps.secs_to_frames_floor(Self::DURATION_S).max(1),
            cadence_frames: fps.secs_to_frames_floor(Self::CADENCE_S).max(1),
            rng: Rng64::new(seed),
        }
    }

    pub fn duration_frames(&self) -> u64 {
        self.duration_frames
    }

    /// Shots due at `elapsed` frames since the celebration began, if any.
    /// The first pair lands one cadence after the start, never at zero.
    ///
    /// Origin jitter comes from the schedule's own RNG; it is fire-and-forget
    /// and never replayed, so it does not need the seeded generator.
    pub fn shots_at(&mut self, elapsed: u64) -> Vec<ConfettiConfig> {
        if elapsed == 0 || elapsed >= self.duration_frames || elapsed % self.cadence_frames != 0 {
            return Vec::new();
        }

        let time_left = (self.duration_frames - elapsed) as f64 / self.duration_frames as f64;
        let particle_count = (Self::BASE_COUNT * time_left).round().max(1.0) as u32;

        let left_x = self.rng.next_in_range(0.1, 0.3);
        let left_y = self.rng.next_f64_01() - 0.2;
        let right_x = self.rng.next_in_range(0.7, 0.9);
        let right_y = self.rng.next_f64_01() - 0.2;

        let shot = |origin: (f64, f64)| ConfettiConfig {
            particle_count,
            start_velocity: 30.0,
            spread_deg: 360.0,
            ticks: 60,
            origin,
            colors: colors(),
        };

        vec![shot((left_x, left_y)), shot((right_x, right_y))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> ConfettiSchedule {
        ConfettiSchedule::new(Fps::new(30, 1).unwrap(), 42)
    }

    #[test]
    fn shots_follow_cadence() {
        let mut s = schedule();
        // Nothing at start; the first pair is due one cadence in.
        assert!(s.shots_at(0).is_empty());
        assert!(s.shots_at(1).is_empty());
        // 0.25 s at 30 fps is frame 7 floored; cadence is int frames.
        let cadence = Fps::new(30, 1).unwrap().secs_to_frames_floor(0.25).max(1);
        assert_eq!(s.shots_at(cadence).len(), 2);
        assert!(s.shots_at(cadence + 1).is_empty());
        assert_eq!(s.shots_at(2 * cadence).len(), 2);
    }

    #[test]
    fn particle_count_tapers() {
        let mut s = schedule();
        let cadence = Fps::new(30, 1).unwrap().secs_to_frames_floor(0.25).max(1);
        let first = s.shots_at(cadence)[0].particle_count;
        let dur = s.duration_frames();
        let late_frame = (dur - 1) / cadence * cadence;
        let late = s.shots_at(late_frame)[0].particle_count;
        assert!(first > late);
        assert!(late >= 1);
    }

    #[test]
    fn nothing_after_duration() {
        let mut s = schedule();
        let dur = s.duration_frames();
        assert!(s.shots_at(dur).is_empty());
        assert!(s.shots_at(dur + 90).is_empty());
    }

    #[test]
    fn origins_stay_in_side_bands() {
        let mut s = schedule();
        let cadence = Fps::new(30, 1).unwrap().secs_to_frames_floor(0.25).max(1);
        let shots = s.shots_at(cadence);
        assert!((0.1..0.3).contains(&shots[0].origin.0));
        assert!((0.7..0.9).contains(&shots[1].origin.0));
    }
}
