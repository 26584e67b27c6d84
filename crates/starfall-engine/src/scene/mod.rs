//! One-shot scene generation: the fixed backdrop a view keeps for its whole
//! lifetime. Everything here is immutable after `generate` returns; only the
//! shooting-star scheduler in `systems` mutates state afterwards.

mod constellation;
mod nebula;
mod star;

pub use constellation::Constellation;
pub use nebula::NebulaCloud;
pub use star::StarPoint;

use crate::core::rng::Rng;

/// The immutable backdrop: star points, constellations, nebula clouds.
#[derive(Debug, Clone)]
pub struct SkyScene {
    pub stars: Vec<StarPoint>,
    pub constellations: Vec<Constellation>,
    pub nebulae: [NebulaCloud; 2],
}

impl SkyScene {
    /// Generate a scene from the injected random source. Total over its
    /// domain: no retries, no failure modes. Same seed, same scene.
    pub fn generate(rng: &mut Rng, star_count: usize, constellation_count: usize) -> Self {
        let stars = (0..star_count).map(|_| StarPoint::sample(rng)).collect();
        let constellations = (0..constellation_count)
            .map(|_| Constellation::sample(rng))
            .collect();

        SkyScene {
            stars,
            constellations,
            nebulae: NebulaCloud::default_pair(),
        }
    }
}
