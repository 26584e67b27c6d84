/// Flat f32 buffer layout read by the render layer over WASM memory.
/// Must stay in sync with the TypeScript reader.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 12 floats]
/// [Stars: star_count × 5 floats]                (static)
/// [Constellations: constellation_count × 22]    (static)
/// [Nebulae: nebula_count × 8 floats]            (static)
/// [Meteors: max_meteors × 6 floats]             (rewritten every frame)
/// ```
///
/// Counts and capacities are written into the header at init; the reader
/// computes section offsets from them.
use crate::api::backdrop::BackdropConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_GENERATION: usize = 0;
pub const HEADER_CLOCK: usize = 1;
pub const HEADER_STAR_COUNT: usize = 2;
pub const HEADER_CONSTELLATION_COUNT: usize = 3;
pub const HEADER_NEBULA_COUNT: usize = 4;
pub const HEADER_METEOR_COUNT: usize = 5;
pub const HEADER_MAX_METEORS: usize = 6;
pub const HEADER_WORLD_EXTENT: usize = 7;
pub const HEADER_PROTOCOL_VERSION: usize = 8;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Both axes of percent space run 0..=100.
pub const WORLD_EXTENT: f32 = 100.0;

/// Floats per star: x, y, radius, base_opacity, twinkle_offset.
pub const STAR_FLOATS: usize = 5;

/// Constellations never exceed five points, so their wire record is a fixed
/// stride with zero padding: point count, 5 point pairs, edge count, 5 edge
/// index pairs.
pub const MAX_CONSTELLATION_POINTS: usize = 5;
pub const CONSTELLATION_FLOATS: usize = 2 + 4 * MAX_CONSTELLATION_POINTS;

/// Floats per nebula: x, y, radius, drift_x, drift_y, scale_pulse, period,
/// opacity.
pub const NEBULA_FLOATS: usize = 8;

/// Floats per shooting star: id, x, y, angle_deg, duration, age.
pub const METEOR_FLOATS: usize = 6;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyLayout {
    pub star_count: usize,
    pub constellation_count: usize,
    pub nebula_count: usize,
    pub max_meteors: usize,

    /// Offset (in floats) where star data begins.
    pub star_offset: usize,
    /// Offset (in floats) where constellation data begins.
    pub constellation_offset: usize,
    /// Offset (in floats) where nebula data begins.
    pub nebula_offset: usize,
    /// Offset (in floats) where meteor data begins.
    pub meteor_offset: usize,

    /// Total buffer size in floats.
    pub total_floats: usize,
    /// Total buffer size in bytes.
    pub total_bytes: usize,
}

impl SkyLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        star_count: usize,
        constellation_count: usize,
        nebula_count: usize,
        max_meteors: usize,
    ) -> Self {
        let star_offset = HEADER_FLOATS;
        let constellation_offset = star_offset + star_count * STAR_FLOATS;
        let nebula_offset = constellation_offset + constellation_count * CONSTELLATION_FLOATS;
        let meteor_offset = nebula_offset + nebula_count * NEBULA_FLOATS;
        let total_floats = meteor_offset + max_meteors * METEOR_FLOATS;

        Self {
            star_count,
            constellation_count,
            nebula_count,
            max_meteors,
            star_offset,
            constellation_offset,
            nebula_offset,
            meteor_offset,
            total_floats,
            total_bytes: total_floats * 4,
        }
    }

    /// Compute layout from a BackdropConfig.
    pub fn from_config(config: &BackdropConfig) -> Self {
        Self::new(
            config.star_count,
            config.constellation_count,
            2,
            config.max_meteors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_layout() {
        let layout = SkyLayout::from_config(&BackdropConfig::default());
        assert_eq!(layout.star_count, 200);
        assert_eq!(layout.constellation_count, 8);
        assert_eq!(layout.nebula_count, 2);
        assert_eq!(layout.max_meteors, 16);
        assert_eq!(layout.star_offset, 12);
        assert_eq!(layout.constellation_offset, 12 + 200 * 5);
        assert_eq!(layout.nebula_offset, 12 + 200 * 5 + 8 * 22);
        assert_eq!(layout.meteor_offset, 12 + 200 * 5 + 8 * 22 + 2 * 8);
        assert_eq!(layout.total_floats, 12 + 200 * 5 + 8 * 22 + 2 * 8 + 16 * 6);
        assert_eq!(layout.total_bytes, layout.total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = SkyLayout::new(50, 4, 2, 8);
        assert_eq!(layout.star_offset, HEADER_FLOATS);
        assert_eq!(
            layout.constellation_offset,
            layout.star_offset + 50 * STAR_FLOATS
        );
        assert_eq!(
            layout.nebula_offset,
            layout.constellation_offset + 4 * CONSTELLATION_FLOATS
        );
        assert_eq!(layout.meteor_offset, layout.nebula_offset + 2 * NEBULA_FLOATS);
        assert_eq!(
            layout.total_floats,
            layout.meteor_offset + 8 * METEOR_FLOATS
        );
    }

    #[test]
    fn constellation_stride_fits_max_shape() {
        // count + 5 points (x, y) + edge count + 5 edges (a, b)
        assert_eq!(CONSTELLATION_FLOATS, 22);
    }
}
