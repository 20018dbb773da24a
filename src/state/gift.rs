//! Gift box and love-letter envelope state machines.

use crate::effects::confetti::ConfettiSchedule;
use crate::effects::shell::PageEffects;
use crate::foundation::core::{FrameIndex, Fps, PageCanvas};
use crate::foundation::seeded::Rng64;
use crate::particles::glitter::{GlitterParticle, GlitterSim};

/// Where the gift box is in its open/close cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GiftPhase {
    Closed,
    /// Lid lifting, glitter overlay running; the reveal lands after 1.5 s.
    Opening,
    Open,
    /// Contents hidden, lid settling back over 0.5 s.
    Closing,
}

/// The gift box: open request -> glitter -> reveal with one confetti
/// celebration -> close request -> settle.
///
/// The celebration fires exactly once per opening, on the Opening -> Open
/// edge; opening an already-open box is a no-op.
#[derive(Debug)]
pub struct GiftBox {
    fps: Fps,
    canvas: PageCanvas,
    phase: GiftPhase,
    glitter: Option<GlitterSim>,
    phase_since: FrameIndex,
    open_delay_frames: u64,
    close_delay_frames: u64,
    celebration: Option<Celebration>,
    rng: Rng64,
}

#[derive(Debug)]
struct Celebration {
    schedule: ConfettiSchedule,
    started_at: FrameIndex,
}

impl GiftBox {
    const OPEN_DELAY_S: f64 = 1.5;
    const CLOSE_DELAY_S: f64 = 0.5;

    pub fn new(fps: Fps, seed: u64, canvas: PageCanvas) -> Self {
        Self {
            fps,
            canvas,
            phase: GiftPhase::Closed,
            glitter: None,
            phase_since: FrameIndex(0),
            open_delay_frames: fps.secs_to_frames_floor(Self::OPEN_DELAY_S).max(1),
            close_delay_frames: fps.secs_to_frames_floor(Self::CLOSE_DELAY_S).max(1),
            celebration: None,
            rng: Rng64::new(seed),
        }
    }

    pub fn phase(&self) -> GiftPhase {
        self.phase
    }

    pub fn glitter_active(&self) -> bool {
        self.glitter.is_some()
    }

    /// Live glitter overlay particles, while the box is not fully closed.
    pub fn glitter_particles(&self) -> Option<&[GlitterParticle]> {
        self.glitter.as_ref().map(GlitterSim::particles)
    }

    /// The viewer clicked the box. Ignored unless the box is closed.
    pub fn open(&mut self, frame: FrameIndex) {
        if self.phase == GiftPhase::Closed {
            self.phase = GiftPhase::Opening;
            self.glitter = Some(GlitterSim::new(
                f64::from(self.canvas.width),
                f64::from(self.canvas.height),
            ));
            self.phase_since = frame;
        }
    }

    /// The viewer dismissed the reveal. Ignored unless the box is open.
    pub fn close(&mut self, frame: FrameIndex) {
        if self.phase == GiftPhase::Open {
            self.phase = GiftPhase::Closing;
            self.phase_since = frame;
        }
    }

    /// Advance the state machine and emit any due confetti shots.
    pub fn tick(&mut self, frame: FrameIndex, effects: &mut dyn PageEffects) {
        if let Some(sim) = self.glitter.as_mut() {
            sim.step();
        }
        match self.phase {
            GiftPhase::Opening => {
                if frame.0.saturating_sub(self.phase_since.0) >= self.open_delay_frames {
                    self.phase = GiftPhase::Open;
                    self.phase_since = frame;
                    self.celebration = Some(Celebration {
                        schedule: ConfettiSchedule::new(self.fps, self.rng.next_u64()),
                        started_at: frame,
                    });
                }
            }
            GiftPhase::Closing => {
                if frame.0.saturating_sub(self.phase_since.0) >= self.close_delay_frames {
                    self.phase = GiftPhase::Closed;
                    self.glitter = None;
                    self.phase_since = frame;
                }
            }
            GiftPhase::Closed | GiftPhase::Open => {}
        }

        if let Some(celebration) = self.celebration.as_mut() {
            let elapsed = frame.0.saturating_sub(celebration.started_at.0);
            if elapsed >= celebration.schedule.duration_frames() {
                self.celebration = None;
            } else {
                for shot in celebration.schedule.shots_at(elapsed) {
                    effects.burst_confetti(shot);
                }
            }
        }
    }
}

/// The sealed love letter and its reading modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Envelope {
    opened: bool,
    modal_open: bool,
}

impl Envelope {
    pub fn is_opened(self) -> bool {
        self.opened
    }

    pub fn is_modal_open(self) -> bool {
        self.modal_open
    }

    /// Break the seal. Once opened the envelope stays open.
    pub fn open(&mut self) {
        self.opened = true;
    }

    pub fn open_modal(&mut self) {
        if self.opened {
            self.modal_open = true;
        }
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }
}
