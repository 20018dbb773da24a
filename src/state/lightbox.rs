//! Gallery lightbox state.

use crate::foundation::core::{FrameIndex, Fps};
use crate::foundation::error::{KeepsakeError, KeepsakeResult};

/// Seconds between automatic advances while auto-rotate is on.
const AUTO_ROTATE_INTERVAL_S: f64 = 5.0;

/// Overlay detail view over a list of gallery items.
///
/// Closing restores the exact pre-open state: selection cleared and
/// auto-rotate switched back off, so nothing leaks across open/close pairs.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Lightbox {
    len: usize,
    selected: Option<usize>,
    auto_rotate: bool,
    rotate_frames: u64,
    last_advance: FrameIndex,
}

impl Lightbox {
    pub fn new(len: usize, fps: Fps) -> KeepsakeResult<Self> {
        if len == 0 {
            return Err(KeepsakeError::validation("lightbox len must be > 0"));
        }
        Ok(Self {
            len,
            selected: None,
            auto_rotate: false,
            rotate_frames: fps.secs_to_frames_floor(AUTO_ROTATE_INTERVAL_S).max(1),
            last_advance: FrameIndex(0),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false // len > 0 by construction
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn open(&mut self, index: usize, frame: FrameIndex) -> KeepsakeResult<()> {
        if index >= self.len {
            return Err(KeepsakeError::validation(format!(
                "lightbox index {index} out of range (len {})",
                self.len
            )));
        }
        self.selected = Some(index);
        self.last_advance = frame;
        Ok(())
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.auto_rotate = false;
    }

    pub fn set_auto_rotate(&mut self, on: bool, frame: FrameIndex) {
        self.auto_rotate = on;
        self.last_advance = frame;
    }

    /// Advance to the next item; from the last item wraps to 0. No-op when closed.
    pub fn next(&mut self) -> Option<usize> {
        self.selected = self.selected.map(|i| (i + 1) % self.len);
        self.selected
    }

    /// Step back to the previous item; from item 0 wraps to the last. No-op when closed.
    pub fn prev(&mut self) -> Option<usize> {
        self.selected = self.selected.map(|i| (i + self.len - 1) % self.len);
        self.selected
    }

    /// Drive auto-rotate. Returns `true` when the selection advanced.
    pub fn tick(&mut self, frame: FrameIndex) -> bool {
        if !self.auto_rotate || self.selected.is_none() {
            self.last_advance = frame;
            return false;
        }
        if frame.0.saturating_sub(self.last_advance.0) >= self.rotate_frames {
            self.next();
            self.last_advance = frame;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightbox() -> Lightbox {
        Lightbox::new(9, Fps::new(30, 1).unwrap()).unwrap()
    }

    #[test]
    fn open_close_restores_pre_open_state() {
        let mut lb = lightbox();
        let before = (lb.selected(), lb.auto_rotate());

        lb.open(3, FrameIndex(0)).unwrap();
        lb.set_auto_rotate(true, FrameIndex(0));
        lb.close();

        assert_eq!((lb.selected(), lb.auto_rotate()), before);
        assert!(!lb.is_open());
    }

    #[test]
    fn next_wraps_from_last_item() {
        let mut lb = lightbox();
        lb.open(8, FrameIndex(0)).unwrap();
        assert_eq!(lb.next(), Some(0));
    }

    #[test]
    fn prev_wraps_from_first_item() {
        let mut lb = lightbox();
        lb.open(0, FrameIndex(0)).unwrap();
        assert_eq!(lb.prev(), Some(8));
    }

    #[test]
    fn open_out_of_range_rejected() {
        let mut lb = lightbox();
        assert!(lb.open(9, FrameIndex(0)).is_err());
        assert!(!lb.is_open());
    }

    #[test]
    fn nav_while_closed_is_a_noop() {
        let mut lb = lightbox();
        assert_eq!(lb.next(), None);
        assert_eq!(lb.prev(), None);
    }

    #[test]
    fn auto_rotate_advances_every_five_seconds() {
        let mut lb = lightbox();
        lb.open(3, FrameIndex(0)).unwrap();
        lb.set_auto_rotate(true, FrameIndex(0));
        assert!(!lb.tick(FrameIndex(149)));
        assert!(lb.tick(FrameIndex(150)));
        assert_eq!(lb.selected(), Some(4));
    }

    #[test]
    fn auto_rotate_idle_while_closed() {
        let mut lb = lightbox();
        lb.set_auto_rotate(true, FrameIndex(0));
        assert!(!lb.tick(FrameIndex(10_000)));
    }
}
