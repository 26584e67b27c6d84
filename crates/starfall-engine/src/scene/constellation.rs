//! Constellations: small connected point-graphs anchored around a random base.

use glam::Vec2;

use crate::anim::{ease, Easing};
use crate::core::rng::Rng;

/// A constellation: 3-5 jittered points and the edges connecting them.
/// Edges reference indices into `points`. Immutable after generation.
#[derive(Debug, Clone)]
pub struct Constellation {
    pub points: Vec<Vec2>,
    pub edges: Vec<(usize, usize)>,
}

impl Constellation {
    /// Half-width of the jitter square around the anchor.
    pub const JITTER: f32 = 10.0;

    /// Draw one constellation: a uniform anchor in [10, 90]^2, 3-5 points
    /// jittered within +/- 10 units of it, chained consecutively, and with
    /// independent 50% probability closed into a cycle when there are more
    /// than 3 points.
    pub fn sample(rng: &mut Rng) -> Self {
        let anchor = Vec2::new(rng.range(10.0, 90.0), rng.range(10.0, 90.0));
        let count = 3 + rng.next_int(3) as usize;

        let points: Vec<Vec2> = (0..count)
            .map(|_| {
                anchor
                    + Vec2::new(
                        rng.range(-Self::JITTER, Self::JITTER),
                        rng.range(-Self::JITTER, Self::JITTER),
                    )
            })
            .collect();

        let mut edges: Vec<(usize, usize)> = (0..count - 1).map(|i| (i, i + 1)).collect();
        // The closing draw happens for every constellation so the RNG stream
        // does not depend on the point count.
        let close = rng.chance(0.5);
        if close && count > 3 {
            edges.push((count - 1, 0));
        }

        Constellation { points, edges }
    }

    /// Line shimmer opacity at `time`: 0.3 -> 0.6 -> 0.3 over one `period`,
    /// staggered by `index * stagger` so the constellations pulse in turn.
    pub fn line_opacity_at(index: usize, time: f32, period: f32, stagger: f32) -> f32 {
        let delay = index as f32 * stagger;
        if time < delay || period <= 0.0 {
            return 0.3;
        }
        let phase = ((time - delay) / period).fract();
        if phase < 0.5 {
            ease(0.3, 0.6, phase * 2.0, Easing::SineInOut)
        } else {
            ease(0.6, 0.3, (phase - 0.5) * 2.0, Easing::SineInOut)
        }
    }
}
