pub mod runner;

pub use runner::BackdropRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<BackdropRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut BackdropRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Backdrop not initialized. Call backdrop_init() first.");
        f(runner)
    })
}

/// Create the backdrop from a seed. Call once before any other export.
#[wasm_bindgen]
pub fn backdrop_init(seed: u32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(BackdropRunner::new(seed as u64));
    });
    log::info!("starfall: initialized");
}

/// Begin the shooting-star spawn loops. Call on view mount.
#[wasm_bindgen]
pub fn backdrop_start() {
    with_runner(|r| r.start());
}

/// Cancel all pending timers. Call on view unmount.
#[wasm_bindgen]
pub fn backdrop_stop() {
    with_runner(|r| r.stop());
}

/// Advance one frame by `dt` seconds and repack the shared buffer.
#[wasm_bindgen]
pub fn backdrop_tick(dt: f32) {
    with_runner(|r| r.frame(dt));
}

/// Swap the visual theme from a JSON string.
#[wasm_bindgen]
pub fn backdrop_load_theme(json: &str) {
    with_runner(|r| r.load_theme(json));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_sky_ptr() -> *const f32 {
    with_runner(|r| r.sky_ptr())
}

#[wasm_bindgen]
pub fn get_sky_len_floats() -> u32 {
    with_runner(|r| r.sky_len_floats())
}

#[wasm_bindgen]
pub fn get_generation() -> u32 {
    with_runner(|r| r.generation())
}

#[wasm_bindgen]
pub fn get_meteor_count() -> u32 {
    with_runner(|r| r.meteor_count())
}

// ---- Section offsets ----

#[wasm_bindgen]
pub fn get_star_offset() -> u32 {
    with_runner(|r| r.star_offset())
}

#[wasm_bindgen]
pub fn get_constellation_offset() -> u32 {
    with_runner(|r| r.constellation_offset())
}

#[wasm_bindgen]
pub fn get_nebula_offset() -> u32 {
    with_runner(|r| r.nebula_offset())
}

#[wasm_bindgen]
pub fn get_meteor_offset() -> u32 {
    with_runner(|r| r.meteor_offset())
}
