//! Deterministic decorative value generation.
//!
//! Particle placement must come out identical every time the same page state
//! is evaluated, so decorative attributes are derived from a pure sine hash
//! of the particle index rather than an RNG. The hash has visible
//! correlation and clustering artifacts and is nowhere near uniform; that is
//! acceptable here because its output only drives decorative motion.

/// Fractional part of `sin(index * multiplier) * 10000`, always in `[0, 1)`.
///
/// Pure and total: the same `(index, multiplier)` pair yields the same value
/// on every call, in every process. Distinct multipliers decorrelate the
/// attributes derived from one index.
pub fn seeded_unit(index: i64, multiplier: i64) -> f64 {
    let seed = (index as f64) * (multiplier as f64);
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}

/// Per-attribute multiplier family for one particle field.
///
/// Each decorative attribute of a particle is derived from the particle
/// index with its own multiplier so that position, size, duration and delay
/// do not collapse onto the same value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttrFamily {
    pub x: i64,
    pub y: i64,
    pub size: i64,
    pub duration: i64,
    pub delay: i64,
}

impl AttrFamily {
    /// Consecutive multipliers `base, base+step, ... base+4*step`.
    pub const fn stepped(base: i64, step: i64) -> Self {
        Self {
            x: base,
            y: base + step,
            size: base + 2 * step,
            duration: base + 3 * step,
            delay: base + 4 * step,
        }
    }
}

/// SplitMix64. Used only for values that are fire-and-forget and never
/// replayed (confetti origin jitter); everything replayable goes through
/// [`seeded_unit`].
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform-ish value in `[min, max)`.
    pub fn next_in_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64_01() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_unit_is_deterministic() {
        for i in [-40, 0, 1, 7, 9999] {
            assert_eq!(seeded_unit(i, 1000), seeded_unit(i, 1000));
        }
    }

    #[test]
    fn seeded_unit_stays_in_unit_interval() {
        let multipliers = [1000, 2000, 3000, 4000, 5000, 11_000, 16_000];
        for i in 0..10_000 {
            for m in multipliers {
                let v = seeded_unit(i, m);
                assert!((0.0..1.0).contains(&v), "f({i},{m}) = {v} out of [0,1)");
            }
        }
    }

    #[test]
    fn multipliers_decorrelate_attributes() {
        // Same index, different multipliers must not all agree.
        let fam = AttrFamily::stepped(1000, 1000);
        let vals = [
            seeded_unit(3, fam.x),
            seeded_unit(3, fam.y),
            seeded_unit(3, fam.size),
        ];
        assert!(vals.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn rng_is_deterministic() {
        let mut a = Rng64::new(123);
        let mut b = Rng64::new(123);
        for _ in 0..10 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn rng_range_is_bounded() {
        let mut rng = Rng64::new(7);
        for _ in 0..100 {
            let v = rng.next_in_range(0.1, 0.3);
            assert!((0.1..0.3).contains(&v));
        }
    }
}
