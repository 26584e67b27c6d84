pub mod anim;
pub mod api;
pub mod assets;
pub mod bridge;
pub mod core;
pub mod scene;
pub mod systems;

// Re-export key types at crate root for convenience
pub use anim::{ease, lerp, Easing};
pub use api::backdrop::{Backdrop, BackdropConfig, SkySnapshot};
pub use api::types::{MeteorId, SkyEvent};
pub use assets::theme::{BackdropTheme, ConstellationStroke, MeteorStyle};
pub use bridge::buffer::{MeteorRecord, SkyBuffer, StarRecord};
pub use bridge::protocol::{SkyLayout, HEADER_FLOATS, METEOR_FLOATS, STAR_FLOATS};
pub use core::rng::Rng;
pub use core::time::FrameClock;
pub use scene::{Constellation, NebulaCloud, SkyScene, StarPoint};
pub use systems::shooting_stars::{ShootingStar, ShootingStarState, TRAVEL_DISTANCE};
pub use systems::spawn_loop::SpawnLoop;
