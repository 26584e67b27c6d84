//! Packs the sky into the flat f32 buffer the render layer reads.

use bytemuck::{Pod, Zeroable};

use crate::api::backdrop::SkySnapshot;
use crate::bridge::protocol::{
    SkyLayout, CONSTELLATION_FLOATS, HEADER_CLOCK, HEADER_CONSTELLATION_COUNT, HEADER_GENERATION,
    HEADER_MAX_METEORS, HEADER_METEOR_COUNT, HEADER_NEBULA_COUNT, HEADER_PROTOCOL_VERSION,
    HEADER_STAR_COUNT, HEADER_WORLD_EXTENT, MAX_CONSTELLATION_POINTS, METEOR_FLOATS,
    NEBULA_FLOATS, PROTOCOL_VERSION, STAR_FLOATS, WORLD_EXTENT,
};

/// Wire record for one background star.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct StarRecord {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub base_opacity: f32,
    pub twinkle_offset: f32,
}

/// Wire record for one live shooting star.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct MeteorRecord {
    pub id: f32,
    pub x: f32,
    pub y: f32,
    pub angle_deg: f32,
    pub duration: f32,
    pub age: f32,
}

/// Owns the flat buffer. Static sections (stars, constellations, nebulae)
/// are written once after scene generation; the header and meteor section
/// are rewritten every frame.
pub struct SkyBuffer {
    layout: SkyLayout,
    data: Vec<f32>,
}

impl SkyBuffer {
    pub fn new(layout: SkyLayout) -> Self {
        let mut data = vec![0.0; layout.total_floats];
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        data[HEADER_WORLD_EXTENT] = WORLD_EXTENT;
        data[HEADER_MAX_METEORS] = layout.max_meteors as f32;
        SkyBuffer { layout, data }
    }

    /// Write the immutable scene sections and their header counts.
    /// Call once, right after generation.
    pub fn write_static(&mut self, snap: &SkySnapshot) {
        let star_count = snap.stars.len().min(self.layout.star_count);
        self.data[HEADER_STAR_COUNT] = star_count as f32;
        for (i, star) in snap.stars.iter().take(star_count).enumerate() {
            let record = StarRecord {
                x: star.pos.x,
                y: star.pos.y,
                radius: star.radius,
                base_opacity: star.base_opacity,
                twinkle_offset: star.twinkle_offset,
            };
            let offset = self.layout.star_offset + i * STAR_FLOATS;
            self.data[offset..offset + STAR_FLOATS]
                .copy_from_slice(bytemuck::cast_slice(&[record]));
        }

        let constellation_count = snap.constellations.len().min(self.layout.constellation_count);
        self.data[HEADER_CONSTELLATION_COUNT] = constellation_count as f32;
        for (i, constellation) in snap.constellations.iter().take(constellation_count).enumerate() {
            let offset = self.layout.constellation_offset + i * CONSTELLATION_FLOATS;
            let section = &mut self.data[offset..offset + CONSTELLATION_FLOATS];
            section.fill(0.0);
            section[0] = constellation.points.len() as f32;
            for (pi, p) in constellation
                .points
                .iter()
                .take(MAX_CONSTELLATION_POINTS)
                .enumerate()
            {
                section[1 + pi * 2] = p.x;
                section[2 + pi * 2] = p.y;
            }
            let edge_base = 1 + MAX_CONSTELLATION_POINTS * 2;
            section[edge_base] = constellation.edges.len() as f32;
            for (ei, &(a, b)) in constellation
                .edges
                .iter()
                .take(MAX_CONSTELLATION_POINTS)
                .enumerate()
            {
                section[edge_base + 1 + ei * 2] = a as f32;
                section[edge_base + 2 + ei * 2] = b as f32;
            }
        }

        let nebula_count = snap.nebulae.len().min(self.layout.nebula_count);
        self.data[HEADER_NEBULA_COUNT] = nebula_count as f32;
        for (i, cloud) in snap.nebulae.iter().take(nebula_count).enumerate() {
            let offset = self.layout.nebula_offset + i * NEBULA_FLOATS;
            self.data[offset..offset + NEBULA_FLOATS].copy_from_slice(&[
                cloud.anchor.x,
                cloud.anchor.y,
                cloud.radius,
                cloud.drift.x,
                cloud.drift.y,
                cloud.scale_pulse,
                cloud.period,
                cloud.opacity,
            ]);
        }
    }

    /// Rewrite the header bookkeeping and the live meteor section.
    /// Call every frame after ticking.
    pub fn write_frame(&mut self, snap: &SkySnapshot) {
        self.data[HEADER_GENERATION] = snap.generation as f32;
        self.data[HEADER_CLOCK] = snap.clock;

        let meteor_count = snap.meteors.len().min(self.layout.max_meteors);
        self.data[HEADER_METEOR_COUNT] = meteor_count as f32;
        for (i, meteor) in snap.meteors.iter().take(meteor_count).enumerate() {
            let record = MeteorRecord {
                id: meteor.id.0 as f32,
                x: meteor.start.x,
                y: meteor.start.y,
                angle_deg: meteor.angle_deg,
                duration: meteor.duration,
                age: snap.clock - meteor.spawned_at,
            };
            let offset = self.layout.meteor_offset + i * METEOR_FLOATS;
            self.data[offset..offset + METEOR_FLOATS]
                .copy_from_slice(bytemuck::cast_slice(&[record]));
        }
    }

    pub fn layout(&self) -> &SkyLayout {
        &self.layout
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len_floats(&self) -> usize {
        self.data.len()
    }
}
