use crate::{
    animation::ease::Ease,
    foundation::core::{FrameIndex, Vec2},
    foundation::error::{KeepsakeError, KeepsakeResult},
};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// How a looped track maps frames past its period back into the period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoopMode {
    Repeat,
    PingPong,
}

impl LoopMode {
    /// Map `frame` into `[0, period)` (Repeat) or the folded ping-pong walk.
    pub fn map_frame(self, frame: u64, period: u64) -> KeepsakeResult<u64> {
        if period == 0 {
            return Err(KeepsakeError::animation("loop period must be > 0"));
        }
        Ok(match self {
            Self::Repeat => frame % period,
            Self::PingPong => {
                if period == 1 {
                    0
                } else {
                    let cycle = 2 * (period - 1);
                    let pos = frame % cycle;
                    if pos < period { pos } else { cycle - pos }
                }
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    Linear,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub frame: FrameIndex,
    pub value: T,
    /// Ease applied toward the next key.
    pub ease: Ease,
}

/// A keyframed value track sampled by local frame.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    /// Keys sorted by frame.
    pub keys: Vec<Keyframe<T>>,
    pub mode: InterpMode,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> KeepsakeResult<()> {
        if self.keys.is_empty() {
            return Err(KeepsakeError::animation(
                "Keyframes must have at least one key",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].frame.0 <= w[1].frame.0) {
            return Err(KeepsakeError::animation(
                "Keyframes keys must be sorted by frame",
            ));
        }
        Ok(())
    }

    pub fn sample(&self, local: FrameIndex) -> KeepsakeResult<T> {
        if self.keys.is_empty() {
            return Err(KeepsakeError::animation("Keyframes has no keys"));
        }

        let f = local.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((f - a.frame.0) as f64) / (denom as f64);
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }

    /// Sample with a start delay and an infinite loop of the given mode.
    ///
    /// Frames before `delay` hold the first key, matching how the page holds
    /// a particle at rest until its staggered delay elapses.
    pub fn sample_looped(
        &self,
        local: FrameIndex,
        delay: u64,
        period: u64,
        mode: LoopMode,
    ) -> KeepsakeResult<T> {
        if local.0 < delay {
            return self.sample(FrameIndex(0));
        }
        let mapped = mode.map_frame(local.0 - delay, period)?;
        self.sample(FrameIndex(mapped))
    }
}

/// Convenience: a two-key linear ramp over `period` frames.
pub fn ramp(from: f64, to: f64, period: u64, ease: Ease) -> Keyframes<f64> {
    Keyframes {
        keys: vec![
            Keyframe {
                frame: FrameIndex(0),
                value: from,
                ease,
            },
            Keyframe {
                frame: FrameIndex(period),
                value: to,
                ease,
            },
        ],
        mode: InterpMode::Linear,
    }
}
