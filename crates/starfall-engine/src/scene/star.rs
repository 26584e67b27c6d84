//! Background star points: generated once, twinkling forever.

use glam::Vec2;

use crate::anim::{ease, Easing};
use crate::core::rng::Rng;

/// A single background star. Immutable once generated; the twinkle is a pure
/// function of time so the render layer never needs to write back.
#[derive(Debug, Clone, Copy)]
pub struct StarPoint {
    /// Position in percent space, [0, 100] on both axes.
    pub pos: Vec2,
    /// Dot radius in CSS pixels, [1, 3).
    pub radius: f32,
    /// Resting opacity, [0.3, 0.8).
    pub base_opacity: f32,
    /// Phase offset into the twinkle cycle, [0, 3) seconds.
    pub twinkle_offset: f32,
}

impl StarPoint {
    /// How far the twinkle dims a star relative to its base opacity.
    pub const TWINKLE_FLOOR: f32 = 0.3;

    /// Draw one star uniformly over the generation ranges.
    pub fn sample(rng: &mut Rng) -> Self {
        StarPoint {
            pos: Vec2::new(rng.range(0.0, 100.0), rng.range(0.0, 100.0)),
            radius: rng.range(1.0, 3.0),
            base_opacity: rng.range(0.3, 0.8),
            twinkle_offset: rng.range(0.0, 3.0),
        }
    }

    /// Twinkle opacity at `time` seconds: base -> base * 0.3 -> base over one
    /// `period`, sine-eased, phase-shifted by `twinkle_offset`. Holds the base
    /// opacity until the offset has elapsed.
    pub fn opacity_at(&self, time: f32, period: f32) -> f32 {
        if time < self.twinkle_offset || period <= 0.0 {
            return self.base_opacity;
        }
        let phase = ((time - self.twinkle_offset) / period).fract();
        let dim = self.base_opacity * Self::TWINKLE_FLOOR;
        if phase < 0.5 {
            ease(self.base_opacity, dim, phase * 2.0, Easing::SineInOut)
        } else {
            ease(dim, self.base_opacity, (phase - 0.5) * 2.0, Easing::SineInOut)
        }
    }

    /// Twinkle scale at `time` seconds: 1.0 -> 0.8 -> 1.0 over one `period`,
    /// in step with the opacity dip.
    pub fn scale_at(&self, time: f32, period: f32) -> f32 {
        if time < self.twinkle_offset || period <= 0.0 {
            return 1.0;
        }
        let phase = ((time - self.twinkle_offset) / period).fract();
        if phase < 0.5 {
            ease(1.0, 0.8, phase * 2.0, Easing::SineInOut)
        } else {
            ease(0.8, 1.0, (phase - 0.5) * 2.0, Easing::SineInOut)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_within_ranges() {
        let mut rng = Rng::new(42);
        for _ in 0..500 {
            let star = StarPoint::sample(&mut rng);
            assert!((0.0..100.0).contains(&star.pos.x));
            assert!((0.0..100.0).contains(&star.pos.y));
            assert!((1.0..3.0).contains(&star.radius));
            assert!((0.3..0.8).contains(&star.base_opacity));
            assert!((0.0..3.0).contains(&star.twinkle_offset));
        }
    }

    #[test]
    fn opacity_holds_base_before_offset() {
        let star = StarPoint {
            pos: Vec2::ZERO,
            radius: 1.5,
            base_opacity: 0.6,
            twinkle_offset: 2.0,
        };
        assert_eq!(star.opacity_at(1.0, 3.0), 0.6);
    }

    #[test]
    fn opacity_dips_at_half_cycle() {
        let star = StarPoint {
            pos: Vec2::ZERO,
            radius: 1.5,
            base_opacity: 0.6,
            twinkle_offset: 0.0,
        };
        let dimmest = star.opacity_at(1.5, 3.0);
        assert!((dimmest - 0.6 * 0.3).abs() < 1e-4);
    }

    #[test]
    fn opacity_stays_within_envelope() {
        let star = StarPoint {
            pos: Vec2::ZERO,
            radius: 2.0,
            base_opacity: 0.5,
            twinkle_offset: 0.7,
        };
        let mut t = 0.0;
        while t < 12.0 {
            let o = star.opacity_at(t, 3.0);
            assert!(o <= 0.5 + 1e-5 && o >= 0.5 * 0.3 - 1e-5, "opacity {} at t={}", o, t);
            t += 0.05;
        }
    }

    #[test]
    fn scale_returns_to_one_each_cycle() {
        let star = StarPoint {
            pos: Vec2::ZERO,
            radius: 2.0,
            base_opacity: 0.5,
            twinkle_offset: 0.0,
        };
        assert!((star.scale_at(3.0, 3.0) - 1.0).abs() < 1e-3);
        assert!((star.scale_at(1.5, 3.0) - 0.8).abs() < 1e-3);
    }
}
