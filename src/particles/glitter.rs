//! Glitter overlay simulation for the gift box.
//!
//! One hundred particles with seeded initial state, stepped by frame. The
//! sim is pure: the same canvas size and step count always produce the same
//! particle state, so repeated evaluations of one page state agree.

use crate::foundation::seeded::seeded_unit;

const GLITTER_COUNT: u32 = 100;
const GLITTER_PALETTE: [&str; 6] = [
    "#ec4899", "#d946ef", "#8b5cf6", "#f9a8d4", "#c084fc", "#ffffff",
];

#[derive(Clone, Debug, PartialEq)]
pub struct GlitterParticle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: &'static str,
    pub vx: f64,
    pub vy: f64,
    pub alpha: f64,
    alpha_speed: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlitterSim {
    width: f64,
    height: f64,
    particles: Vec<GlitterParticle>,
}

impl GlitterSim {
    /// Seed the field for a canvas of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        let particles = (0..GLITTER_COUNT)
            .map(|i| {
                let idx = i64::from(i);
                let r1 = seeded_unit(idx, 1000);
                let r2 = seeded_unit(idx, 2000);
                let r3 = seeded_unit(idx, 3000);

                let slot = ((r1 * GLITTER_PALETTE.len() as f64) as usize)
                    .min(GLITTER_PALETTE.len() - 1);

                GlitterParticle {
                    x: r1 * width,
                    y: r2 * height,
                    size: 1.0 + r3 * 3.0,
                    color: GLITTER_PALETTE[slot],
                    vx: (r2 - 0.5) * 0.5,
                    vy: (r3 - 0.5) * 0.5,
                    alpha: 0.1 + r1 * 0.9,
                    alpha_speed: 0.005 + r2 * 0.01,
                }
            })
            .collect();

        Self {
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[GlitterParticle] {
        &self.particles
    }

    /// Advance one animation tick: drift, bounce off edges, pulse alpha.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }

            p.alpha += p.alpha_speed;
            if p.alpha > 1.0 || p.alpha < 0.1 {
                p.alpha_speed = -p.alpha_speed;
            }
        }
    }

    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_is_deterministic() {
        let a = GlitterSim::new(640.0, 360.0);
        let b = GlitterSim::new(640.0, 360.0);
        assert_eq!(a, b);
        assert_eq!(a.particles().len(), 100);
    }

    #[test]
    fn stepping_is_deterministic() {
        let mut a = GlitterSim::new(640.0, 360.0);
        let mut b = GlitterSim::new(640.0, 360.0);
        a.step_n(500);
        b.step_n(500);
        assert_eq!(a, b);
    }

    #[test]
    fn particles_stay_near_canvas() {
        let mut sim = GlitterSim::new(200.0, 100.0);
        sim.step_n(5_000);
        for p in sim.particles() {
            // One step of overshoot is allowed before the bounce reverses.
            assert!(p.x >= -1.0 && p.x <= 201.0);
            assert!(p.y >= -1.0 && p.y <= 101.0);
        }
    }

    #[test]
    fn alpha_pulsates_within_bounds() {
        let mut sim = GlitterSim::new(200.0, 100.0);
        sim.step_n(2_000);
        for p in sim.particles() {
            assert!(p.alpha > 0.0 && p.alpha <= 1.02, "alpha {}", p.alpha);
        }
    }
}
