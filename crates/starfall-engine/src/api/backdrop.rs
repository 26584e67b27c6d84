use crate::api::types::SkyEvent;
use crate::assets::theme::BackdropTheme;
use crate::core::rng::Rng;
use crate::scene::{Constellation, NebulaCloud, SkyScene, StarPoint};
use crate::systems::shooting_stars::{ShootingStar, ShootingStarState};

/// Generation and scheduling parameters. The defaults reproduce the stock
/// backdrop; embedders override individual fields for denser or calmer skies.
#[derive(Debug, Clone)]
pub struct BackdropConfig {
    /// Background stars generated per scene.
    pub star_count: usize,
    /// Constellations generated per scene.
    pub constellation_count: usize,
    /// Concurrent, independently seeded spawn loops.
    pub spawn_loop_count: usize,
    /// Min/max wait between spawns per loop, in seconds.
    pub spawn_delay_range: (f32, f32),
    /// Min/max shooting-star travel time, in seconds.
    pub duration_range: (f32, f32),
    /// Min/max travel angle in degrees.
    pub angle_range: (f32, f32),
    /// Extra seconds an event lingers after its travel before removal, so
    /// the render layer's fade-out is never cut short.
    pub settle_margin: f32,
    /// Wire-buffer capacity for concurrent events.
    pub max_meteors: usize,
    /// Fixed timestep for the frame clock, in seconds.
    pub fixed_dt: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            star_count: 200,
            constellation_count: 8,
            spawn_loop_count: 2,
            spawn_delay_range: (2.0, 5.0),
            duration_range: (1.5, 2.5),
            angle_range: (20.0, 65.0),
            settle_margin: 0.5,
            max_meteors: 16,
            fixed_dt: 1.0 / 60.0,
        }
    }
}

/// Read-only view over everything the render layer draws. Borrowed fresh
/// each render tick; `generation` tells the consumer whether anything
/// changed since the last read.
pub struct SkySnapshot<'a> {
    pub stars: &'a [StarPoint],
    pub constellations: &'a [Constellation],
    pub nebulae: &'a [NebulaCloud; 2],
    pub meteors: &'a [ShootingStar],
    pub generation: u64,
    /// Virtual seconds since the backdrop started running.
    pub clock: f32,
}

/// The backdrop facade: owns the immutable scene, the shooting-star
/// scheduler and the theme. The hosting view calls `start` on mount,
/// `tick` every frame and `stop` on unmount; nothing else mutates.
pub struct Backdrop {
    config: BackdropConfig,
    scene: SkyScene,
    shower: ShootingStarState,
    theme: BackdropTheme,
}

impl Backdrop {
    pub fn new(config: BackdropConfig, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let scene = SkyScene::generate(&mut rng, config.star_count, config.constellation_count);
        let shower = ShootingStarState::new(&config, seed);
        Backdrop {
            config,
            scene,
            shower,
            theme: BackdropTheme::default(),
        }
    }

    /// Begin the spawn loops. Idempotent.
    pub fn start(&mut self) {
        log::debug!("backdrop started");
        self.shower.start();
    }

    /// Cancel every pending spawn and removal timer. After this returns the
    /// active-events collection no longer mutates.
    pub fn stop(&mut self) {
        log::debug!("backdrop stopped");
        self.shower.stop();
    }

    /// Advance the virtual clock by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.shower.tick(dt);
    }

    /// Borrow the current state for rendering.
    pub fn snapshot(&self) -> SkySnapshot<'_> {
        SkySnapshot {
            stars: &self.scene.stars,
            constellations: &self.scene.constellations,
            nebulae: &self.scene.nebulae,
            meteors: &self.shower.meteors,
            generation: self.shower.generation(),
            clock: self.shower.clock(),
        }
    }

    /// Monotonic change counter for cheap polling.
    pub fn generation(&self) -> u64 {
        self.shower.generation()
    }

    /// Drain queued spawn/retire notifications.
    pub fn drain_events(&mut self) -> impl Iterator<Item = SkyEvent> + '_ {
        self.shower.drain_events()
    }

    /// Twinkle opacity for a star at the current clock, using the theme's
    /// period.
    pub fn twinkle_opacity(&self, star: &StarPoint) -> f32 {
        star.opacity_at(self.shower.clock(), self.theme.twinkle_period)
    }

    /// Shimmer opacity for the constellation at `index` at the current
    /// clock, using the theme's period and stagger.
    pub fn constellation_pulse(&self, index: usize) -> f32 {
        Constellation::line_opacity_at(
            index,
            self.shower.clock(),
            self.theme.pulse_period,
            self.theme.pulse_stagger,
        )
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    pub fn theme(&self) -> &BackdropTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: BackdropTheme) {
        self.theme = theme;
    }
}
