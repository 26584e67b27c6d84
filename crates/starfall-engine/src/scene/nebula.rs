//! Nebula clouds: two large blurred blobs drifting on slow loops behind the
//! starfield. Fixed descriptors; the render layer animates the loop.

use glam::Vec2;

use crate::anim::{ease, Easing};

/// A drifting nebula cloud, described declaratively in percent space.
#[derive(Debug, Clone, Copy)]
pub struct NebulaCloud {
    /// Loop origin in percent space.
    pub anchor: Vec2,
    /// Blob radius in percent of the viewport's larger axis.
    pub radius: f32,
    /// Peak drift offset reached at the middle of each loop.
    pub drift: Vec2,
    /// Peak scale reached at the middle of each loop.
    pub scale_pulse: f32,
    /// Loop length in seconds.
    pub period: f32,
    /// Fill opacity.
    pub opacity: f32,
}

impl NebulaCloud {
    /// The two clouds behind every scene: a large one looping from the top
    /// right and a smaller one looping from the bottom left. Different
    /// periods keep the pair from ever syncing up.
    pub fn default_pair() -> [NebulaCloud; 2] {
        [
            NebulaCloud {
                anchor: Vec2::new(100.0, 0.0),
                radius: 40.0,
                drift: Vec2::new(8.0, 12.0),
                scale_pulse: 1.3,
                period: 25.0,
                opacity: 0.2,
            },
            NebulaCloud {
                anchor: Vec2::new(0.0, 100.0),
                radius: 30.0,
                drift: Vec2::new(-8.0, -8.0),
                scale_pulse: 1.2,
                period: 20.0,
                opacity: 0.2,
            },
        ]
    }

    /// Drift offset at `time`: zero -> `drift` -> zero over one period.
    pub fn offset_at(&self, time: f32) -> Vec2 {
        let wave = self.loop_wave(time);
        self.drift * wave
    }

    /// Scale at `time`: 1.0 -> `scale_pulse` -> 1.0 over one period.
    pub fn scale_at(&self, time: f32) -> f32 {
        ease(1.0, self.scale_pulse, self.loop_wave(time), Easing::Linear)
    }

    /// Normalized out-and-back wave: 0 at loop start/end, 1 at the midpoint.
    fn loop_wave(&self, time: f32) -> f32 {
        if self.period <= 0.0 {
            return 0.0;
        }
        let phase = (time / self.period).fract();
        if phase < 0.5 {
            Easing::SineInOut.apply(phase * 2.0)
        } else {
            Easing::SineInOut.apply((1.0 - phase) * 2.0)
        }
    }
}
