//! Scroll-driven visibility and parallax.

/// Current scroll position and viewport height in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }
}

/// Per-section parallax factors, top of page first. Early sections trail the
/// scroll; late sections run slightly ahead of it.
pub const PARALLAX_FACTORS: [f64; 8] = [0.3, 0.2, 0.1, 0.0, -0.05, -0.1, -0.15, -0.2];

/// Vertical parallax offset for a section with the given factor.
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

/// A section is visible when at least roughly half of it is on screen:
/// its top above 75% of the viewport and its bottom below 25%.
///
/// `top`/`bottom` are document coordinates.
pub fn section_visible(top: f64, bottom: f64, viewport: Viewport) -> bool {
    let rel_top = top - viewport.scroll_y;
    let rel_bottom = bottom - viewport.scroll_y;
    rel_top < viewport.height * 0.75 && rel_bottom > viewport.height * 0.25
}

/// Clamped linear remap of `v` from `[in0, in1]` to `[out0, out1]`.
pub fn map_range(v: f64, in0: f64, in1: f64, out0: f64, out1: f64) -> f64 {
    if in0 == in1 {
        return out0;
    }
    let t = ((v - in0) / (in1 - in0)).clamp(0.0, 1.0);
    out0 + (out1 - out0) * t
}

/// Hero title lift over the first 300 px of scroll.
pub fn hero_title_y(scroll_y: f64) -> f64 {
    map_range(scroll_y, 0.0, 300.0, 0.0, -100.0)
}

/// Hero photo shrink over the first 300 px of scroll.
pub fn hero_photo_scale(scroll_y: f64) -> f64 {
    map_range(scroll_y, 0.0, 300.0, 1.0, 0.8)
}

/// Hero photo fade over the first 300 px of scroll.
pub fn hero_photo_opacity(scroll_y: f64) -> f64 {
    map_range(scroll_y, 0.0, 300.0, 1.0, 0.6)
}

/// Damped spring that smooths raw scroll input into animation-friendly
/// motion. Stepped once per frame toward the latest raw value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSpring {
    pub position: f64,
    pub velocity: f64,
    pub stiffness: f64,
    pub damping: f64,
}

impl ScrollSpring {
    pub fn new(initial: f64) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            stiffness: 100.0,
            damping: 30.0,
        }
    }

    /// Semi-implicit Euler step toward `target` over `dt` seconds.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let accel = self.stiffness * (target - self.position) - self.damping * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
        self.position
    }

    /// True once the spring has effectively settled on `target`.
    pub fn settled(&self, target: f64) -> bool {
        (self.position - target).abs() < 1e-3 && self.velocity.abs() < 1e-3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_rule_boundaries() {
        let vp = Viewport::new(0.0, 800.0);
        // Section fully on screen.
        assert!(section_visible(100.0, 700.0, vp));
        // Top exactly at the 75% line fails the strict inequality.
        assert!(!section_visible(600.0, 1400.0, vp));
        assert!(section_visible(599.0, 1400.0, vp));
        // Bottom exactly at the 25% line fails.
        assert!(!section_visible(-600.0, 200.0, vp));
        assert!(section_visible(-600.0, 201.0, vp));
    }

    #[test]
    fn visibility_follows_scroll() {
        let section = (800.0, 1600.0);
        assert!(!section_visible(
            section.0,
            section.1,
            Viewport::new(0.0, 800.0)
        ));
        assert!(section_visible(
            section.0,
            section.1,
            Viewport::new(800.0, 800.0)
        ));
    }

    #[test]
    fn map_range_clamps() {
        assert_eq!(map_range(-50.0, 0.0, 300.0, 0.0, -100.0), 0.0);
        assert_eq!(map_range(150.0, 0.0, 300.0, 0.0, -100.0), -50.0);
        assert_eq!(map_range(900.0, 0.0, 300.0, 0.0, -100.0), -100.0);
    }

    #[test]
    fn hero_maps_match_endpoints() {
        assert_eq!(hero_title_y(0.0), 0.0);
        assert_eq!(hero_title_y(300.0), -100.0);
        assert_eq!(hero_photo_scale(300.0), 0.8);
        assert_eq!(hero_photo_opacity(300.0), 0.6);
    }

    #[test]
    fn spring_converges_to_target() {
        let mut spring = ScrollSpring::new(0.0);
        for _ in 0..600 {
            spring.step(500.0, 1.0 / 30.0);
        }
        assert!(spring.settled(500.0), "position {}", spring.position);
    }

    #[test]
    fn spring_motion_is_smooth_not_instant() {
        let mut spring = ScrollSpring::new(0.0);
        spring.step(500.0, 1.0 / 30.0);
        assert!(spring.position < 100.0);
        assert!(spring.position > 0.0);
    }
}
