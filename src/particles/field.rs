//! Decorative particle fields.
//!
//! A field is an authored plan (count, multiplier family, value ranges) that
//! expands into per-particle specs via the seeded generator, so the same
//! plan always produces the same particles.

use crate::foundation::error::{KeepsakeError, KeepsakeResult};
use crate::foundation::seeded::{AttrFamily, seeded_unit};

/// How a particle picks its palette color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PaletteRule {
    /// `palette[index % len]`.
    Cycle,
    /// `palette[floor(seeded_x * len)]`.
    Seeded,
}

/// How a particle receives its animation start delay.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DelayRule {
    /// `seeded_delay * span` seconds.
    Seeded { span_s: f64 },
    /// `index * step` seconds, a fixed stagger.
    Linear { step_s: f64 },
}

/// Inclusive-start numeric range `min + seeded * span`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeededRange {
    pub min: f64,
    pub span: f64,
}

impl SeededRange {
    pub const fn new(min: f64, span: f64) -> Self {
        Self { min, span }
    }

    fn at(self, unit: f64) -> f64 {
        self.min + unit * self.span
    }
}

/// An authored decorative particle field.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ParticleField {
    pub name: String,
    pub count: u32,
    pub family: AttrFamily,
    /// Horizontal position as a percentage of the section width.
    pub x_pct: SeededRange,
    /// Vertical position as a percentage of the section height.
    pub y_pct: SeededRange,
    /// Particle size in pixels.
    pub size: SeededRange,
    /// One loop of the particle's motion, in seconds.
    pub duration_s: SeededRange,
    pub delay: DelayRule,
    /// Upward travel over one loop, in pixels.
    pub rise_px: f64,
    /// Opacity at the rest points of the loop.
    pub opacity_lo: f64,
    /// Opacity at the peak of the loop.
    pub opacity_hi: f64,
    /// Hex colors drawn from per particle.
    pub palette: Vec<String>,
    pub palette_rule: PaletteRule,
}

/// One expanded particle: every value derived from its index.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleSpec {
    pub index: u32,
    pub x_pct: f64,
    pub y_pct: f64,
    pub size: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub color: String,
}

impl ParticleField {
    pub fn validate(&self) -> KeepsakeResult<()> {
        if self.name.trim().is_empty() {
            return Err(KeepsakeError::validation("field name must be non-empty"));
        }
        if self.count == 0 {
            return Err(KeepsakeError::validation("field count must be > 0"));
        }
        if self.palette.is_empty() {
            return Err(KeepsakeError::validation("field palette must be non-empty"));
        }
        for (label, range) in [
            ("x_pct", self.x_pct),
            ("y_pct", self.y_pct),
            ("size", self.size),
            ("duration_s", self.duration_s),
        ] {
            if !range.min.is_finite() || !range.span.is_finite() || range.span < 0.0 {
                return Err(KeepsakeError::validation(format!(
                    "field {label} range must be finite with span >= 0"
                )));
            }
        }
        if self.duration_s.min <= 0.0 {
            return Err(KeepsakeError::validation(
                "field duration_s min must be > 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.opacity_lo)
            || !(0.0..=1.0).contains(&self.opacity_hi)
            || self.opacity_lo > self.opacity_hi
        {
            return Err(KeepsakeError::validation(
                "field opacity bounds must satisfy 0 <= lo <= hi <= 1",
            ));
        }
        match self.delay {
            DelayRule::Seeded { span_s } if !(span_s.is_finite() && span_s >= 0.0) => Err(
                KeepsakeError::validation("field delay span_s must be finite and >= 0"),
            ),
            DelayRule::Linear { step_s } if !(step_s.is_finite() && step_s >= 0.0) => Err(
                KeepsakeError::validation("field delay step_s must be finite and >= 0"),
            ),
            _ => Ok(()),
        }
    }

    /// Expand the plan into concrete particles. Deterministic.
    pub fn expand(&self) -> Vec<ParticleSpec> {
        (0..self.count).map(|i| self.particle(i)).collect()
    }

    fn particle(&self, i: u32) -> ParticleSpec {
        let idx = i64::from(i);
        let rx = seeded_unit(idx, self.family.x);
        let ry = seeded_unit(idx, self.family.y);
        let rs = seeded_unit(idx, self.family.size);
        let rd = seeded_unit(idx, self.family.duration);

        let delay_s = match self.delay {
            DelayRule::Seeded { span_s } => seeded_unit(idx, self.family.delay) * span_s,
            DelayRule::Linear { step_s } => f64::from(i) * step_s,
        };

        let color = match self.palette_rule {
            PaletteRule::Cycle => self.palette[i as usize % self.palette.len()].clone(),
            PaletteRule::Seeded => {
                let slot = ((rx * self.palette.len() as f64) as usize).min(self.palette.len() - 1);
                self.palette[slot].clone()
            }
        };

        ParticleSpec {
            index: i,
            x_pct: self.x_pct.at(rx),
            y_pct: self.y_pct.at(ry),
            size: self.size.at(rs),
            duration_s: self.duration_s.at(rd),
            delay_s,
            color,
        }
    }
}

const SOFT_PALETTE: [&str; 5] = ["#f472b6", "#ec4899", "#c084fc", "#ffffff", "#d8b4fe"];
const HEART_PALETTE: [&str; 4] = ["#ff6b8b", "#f472b6", "#c084fc", "#d8b4fe"];
const STAR_PALETTE: [&str; 3] = ["#ffffff", "#f9a8d4", "#d8b4fe"];
const ORB_PALETTE: [&str; 2] = ["#f472b6", "#c084fc"];

fn palette(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| (*c).to_string()).collect()
}

/// Forty soft radial orbs drifting behind the hero headline.
pub fn hero_drift() -> ParticleField {
    ParticleField {
        name: "hero-drift".into(),
        count: 40,
        family: AttrFamily::stepped(1000, 1000),
        x_pct: SeededRange::new(0.0, 100.0),
        y_pct: SeededRange::new(0.0, 100.0),
        size: SeededRange::new(2.0, 8.0),
        duration_s: SeededRange::new(15.0, 30.0),
        delay: DelayRule::Seeded { span_s: 5.0 },
        rise_px: 30.0,
        opacity_lo: 0.2,
        opacity_hi: 0.8,
        palette: palette(&SOFT_PALETTE),
        palette_rule: PaletteRule::Cycle,
    }
}

/// Thirty floating hearts rising through the hero section.
pub fn hero_hearts() -> ParticleField {
    ParticleField {
        name: "hero-hearts".into(),
        count: 30,
        family: AttrFamily::stepped(6000, 1000),
        x_pct: SeededRange::new(0.0, 100.0),
        y_pct: SeededRange::new(0.0, 100.0),
        size: SeededRange::new(12.0, 40.0),
        duration_s: SeededRange::new(18.0, 20.0),
        delay: DelayRule::Seeded { span_s: 10.0 },
        rise_px: 100.0,
        opacity_lo: 0.0,
        opacity_hi: 0.7,
        palette: palette(&HEART_PALETTE),
        palette_rule: PaletteRule::Cycle,
    }
}

/// Twenty twinkling stars inset away from the hero edges.
pub fn hero_stars() -> ParticleField {
    ParticleField {
        name: "hero-stars".into(),
        count: 20,
        family: AttrFamily {
            x: 11_000,
            y: 12_000,
            size: 13_000,
            duration: 15_000,
            delay: 16_000,
        },
        x_pct: SeededRange::new(10.0, 80.0),
        y_pct: SeededRange::new(10.0, 80.0),
        size: SeededRange::new(2.0, 3.0),
        duration_s: SeededRange::new(2.0, 3.0),
        delay: DelayRule::Seeded { span_s: 5.0 },
        rise_px: 0.0,
        opacity_lo: 0.2,
        opacity_hi: 1.0,
        palette: palette(&STAR_PALETTE),
        palette_rule: PaletteRule::Cycle,
    }
}

/// Fifteen slow orbs behind the gallery grid.
pub fn gallery_orbs() -> ParticleField {
    ParticleField {
        name: "gallery-orbs".into(),
        count: 15,
        family: AttrFamily::stepped(21_000, 1000),
        x_pct: SeededRange::new(0.0, 100.0),
        y_pct: SeededRange::new(0.0, 100.0),
        size: SeededRange::new(4.0, 8.0),
        duration_s: SeededRange::new(15.0, 15.0),
        delay: DelayRule::Seeded { span_s: 5.0 },
        rise_px: 30.0,
        opacity_lo: 0.2,
        opacity_hi: 0.7,
        palette: palette(&ORB_PALETTE),
        palette_rule: PaletteRule::Cycle,
    }
}

/// Fifteen faint hearts drifting behind the timeline.
pub fn timeline_hearts() -> ParticleField {
    ParticleField {
        name: "timeline-hearts".into(),
        count: 15,
        family: AttrFamily::stepped(26_000, 1000),
        x_pct: SeededRange::new(0.0, 100.0),
        y_pct: SeededRange::new(0.0, 100.0),
        size: SeededRange::new(6.0, 14.0),
        duration_s: SeededRange::new(5.0, 10.0),
        delay: DelayRule::Seeded { span_s: 5.0 },
        rise_px: 20.0,
        opacity_lo: 0.0,
        opacity_hi: 0.3,
        palette: palette(&["#f472b6", "#d946ef"]),
        palette_rule: PaletteRule::Cycle,
    }
}

/// Thirty background stars behind the gift box, staggered 0.1 s apart.
pub fn gift_stars() -> ParticleField {
    ParticleField {
        name: "gift-stars".into(),
        count: 30,
        family: AttrFamily {
            x: 11_000,
            y: 12_000,
            size: 13_000,
            duration: 14_000,
            delay: 0, // unused with a linear stagger
        },
        x_pct: SeededRange::new(0.0, 100.0),
        y_pct: SeededRange::new(0.0, 100.0),
        size: SeededRange::new(1.0, 3.0),
        duration_s: SeededRange::new(1.0, 2.0),
        delay: DelayRule::Linear { step_s: 0.1 },
        rise_px: 0.0,
        opacity_lo: 0.1,
        opacity_hi: 1.0,
        palette: palette(&["#ffffff"]),
        palette_rule: PaletteRule::Cycle,
    }
}
