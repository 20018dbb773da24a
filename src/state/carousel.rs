//! Cyclic index rotation for quotes, wishes, and similar decks.

use crate::foundation::core::{FrameIndex, Fps};
use crate::foundation::error::{KeepsakeError, KeepsakeResult};

/// A cyclic cursor over `len` display items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> KeepsakeResult<Self> {
        if len == 0 {
            return Err(KeepsakeError::validation("carousel len must be > 0"));
        }
        Ok(Self { len, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false // len > 0 by construction
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance one item; from the last index this wraps to 0.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Step back one item; from index 0 this wraps to the last index.
    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    pub fn select(&mut self, index: usize) -> KeepsakeResult<()> {
        if index >= self.len {
            return Err(KeepsakeError::validation(format!(
                "carousel index {index} out of range (len {})",
                self.len
            )));
        }
        self.index = index;
        Ok(())
    }
}

/// Behavior of autoplay when the viewer navigates manually.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ManualNavPolicy {
    /// Manual navigation switches autoplay off until re-enabled (quotes).
    DisableAutoplay,
    /// Manual navigation leaves autoplay running (wishes).
    KeepAutoplay,
}

/// A carousel plus its per-section timer.
///
/// The timer is explicit and frame-driven: the owner calls [`RotatingDeck::tick`]
/// once per frame while the section is visible, and simply stops calling it
/// when the section scrolls away or is torn down. There is nothing to cancel.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RotatingDeck {
    carousel: Carousel,
    interval_frames: u64,
    cooldown_frames: u64,
    policy: ManualNavPolicy,
    autoplay: bool,
    hovered: bool,
    last_advance: FrameIndex,
    cooldown_until: FrameIndex,
}

impl RotatingDeck {
    pub fn new(
        len: usize,
        fps: Fps,
        interval_s: f64,
        policy: ManualNavPolicy,
    ) -> KeepsakeResult<Self> {
        if !(interval_s.is_finite() && interval_s > 0.0) {
            return Err(KeepsakeError::validation(
                "deck interval_s must be finite and > 0",
            ));
        }
        Ok(Self {
            carousel: Carousel::new(len)?,
            interval_frames: fps.secs_to_frames_floor(interval_s).max(1),
            // Manual navigation is debounced for 500 ms.
            cooldown_frames: fps.secs_to_frames_floor(0.5),
            policy,
            autoplay: true,
            hovered: false,
            last_advance: FrameIndex(0),
            cooldown_until: FrameIndex(0),
        })
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn len(&self) -> usize {
        self.carousel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousel.is_empty()
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay = enabled;
    }

    fn in_cooldown(&self, frame: FrameIndex) -> bool {
        frame.0 < self.cooldown_until.0
    }

    fn note_manual_nav(&mut self, frame: FrameIndex) {
        if self.policy == ManualNavPolicy::DisableAutoplay {
            self.autoplay = false;
        }
        self.cooldown_until = FrameIndex(frame.0 + self.cooldown_frames);
        self.last_advance = frame;
    }

    /// Manual "next". Ignored while the previous navigation is still animating.
    pub fn next_manual(&mut self, frame: FrameIndex) -> usize {
        if !self.in_cooldown(frame) {
            self.carousel.next();
            self.note_manual_nav(frame);
        }
        self.carousel.index()
    }

    /// Manual "previous". Ignored while the previous navigation is still animating.
    pub fn prev_manual(&mut self, frame: FrameIndex) -> usize {
        if !self.in_cooldown(frame) {
            self.carousel.prev();
            self.note_manual_nav(frame);
        }
        self.carousel.index()
    }

    pub fn select(&mut self, index: usize, frame: FrameIndex) -> KeepsakeResult<()> {
        self.carousel.select(index)?;
        self.cooldown_until = FrameIndex(frame.0 + self.cooldown_frames);
        Ok(())
    }

    /// Advance the autoplay timer. Returns `true` when the deck rotated.
    pub fn tick(&mut self, frame: FrameIndex) -> bool {
        if !self.autoplay || self.hovered {
            // A paused timer does not accumulate elapsed time.
            self.last_advance = frame;
            return false;
        }
        if frame.0.saturating_sub(self.last_advance.0) >= self.interval_frames {
            self.carousel.next();
            self.last_advance = frame;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fps() -> Fps {
        Fps::new(30, 1).unwrap()
    }

    #[test]
    fn next_wraps_to_zero() {
        let mut c = Carousel::new(4).unwrap();
        c.select(3).unwrap();
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut c = Carousel::new(4).unwrap();
        assert_eq!(c.prev(), 3);
    }

    #[test]
    fn interior_steps() {
        let mut c = Carousel::new(5).unwrap();
        c.select(2).unwrap();
        assert_eq!(c.next(), 3);
        assert_eq!(c.prev(), 2);
    }

    #[test]
    fn select_out_of_range_rejected() {
        let mut c = Carousel::new(3).unwrap();
        assert!(c.select(3).is_err());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn autoplay_advances_on_interval() {
        let mut deck =
            RotatingDeck::new(4, fps(), 5.0, ManualNavPolicy::KeepAutoplay).unwrap();
        // 5 s at 30 fps = 150 frames.
        for f in 1..150 {
            assert!(!deck.tick(FrameIndex(f)));
        }
        assert!(deck.tick(FrameIndex(150)));
        assert_eq!(deck.index(), 1);
    }

    #[test]
    fn hover_pauses_autoplay() {
        let mut deck =
            RotatingDeck::new(4, fps(), 1.0, ManualNavPolicy::KeepAutoplay).unwrap();
        deck.set_hovered(true);
        for f in 1..300 {
            assert!(!deck.tick(FrameIndex(f)));
        }
        deck.set_hovered(false);
        // Pause reset the timer, so a full interval must elapse again.
        assert!(!deck.tick(FrameIndex(301)));
        assert!(deck.tick(FrameIndex(330)));
    }

    #[test]
    fn manual_nav_disables_autoplay_for_quotes_policy() {
        let mut deck =
            RotatingDeck::new(4, fps(), 1.0, ManualNavPolicy::DisableAutoplay).unwrap();
        deck.next_manual(FrameIndex(10));
        assert!(!deck.autoplay_enabled());
        assert!(!deck.tick(FrameIndex(1000)));
    }

    #[test]
    fn manual_nav_debounced_during_cooldown() {
        let mut deck =
            RotatingDeck::new(4, fps(), 10.0, ManualNavPolicy::KeepAutoplay).unwrap();
        assert_eq!(deck.next_manual(FrameIndex(10)), 1);
        // 0.5 s at 30 fps = 15 frames; a second press inside that is ignored.
        assert_eq!(deck.next_manual(FrameIndex(20)), 1);
        assert_eq!(deck.next_manual(FrameIndex(26)), 2);
    }
}
