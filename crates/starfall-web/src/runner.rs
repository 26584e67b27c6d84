use starfall_engine::{
    Backdrop, BackdropConfig, BackdropTheme, FrameClock, SkyBuffer, SkyLayout,
};

/// Wires the backdrop engine to a browser frame loop: converts variable
/// frame deltas into fixed ticks and repacks the shared buffer after every
/// frame. The JS side reads the buffer through the exported pointer.
pub struct BackdropRunner {
    backdrop: Backdrop,
    clock: FrameClock,
    buffer: SkyBuffer,
}

impl BackdropRunner {
    pub fn new(seed: u64) -> Self {
        Self::with_config(BackdropConfig::default(), seed)
    }

    pub fn with_config(config: BackdropConfig, seed: u64) -> Self {
        let layout = SkyLayout::from_config(&config);
        let clock = FrameClock::new(config.fixed_dt);
        let backdrop = Backdrop::new(config, seed);
        let mut buffer = SkyBuffer::new(layout);
        buffer.write_static(&backdrop.snapshot());
        Self {
            backdrop,
            clock,
            buffer,
        }
    }

    pub fn start(&mut self) {
        self.backdrop.start();
    }

    pub fn stop(&mut self) {
        self.backdrop.stop();
    }

    /// Run one browser frame: consume `dt` seconds in fixed steps, then
    /// repack the header and meteor section.
    pub fn frame(&mut self, dt: f32) {
        let steps = self.clock.accumulate(dt);
        for _ in 0..steps {
            self.backdrop.tick(self.clock.dt());
        }
        self.buffer.write_frame(&self.backdrop.snapshot());
    }

    /// Swap the theme from a JSON string. A malformed theme is logged and
    /// ignored; the backdrop keeps its current styling.
    pub fn load_theme(&mut self, json: &str) {
        match BackdropTheme::from_json(json) {
            Ok(theme) => self.backdrop.set_theme(theme),
            Err(err) => log::warn!("ignoring malformed theme: {}", err),
        }
    }

    // ---- Pointer accessors for buffer reads ----

    pub fn sky_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn sky(&self) -> &[f32] {
        self.buffer.as_slice()
    }

    pub fn sky_len_floats(&self) -> u32 {
        self.buffer.len_floats() as u32
    }

    pub fn generation(&self) -> u32 {
        self.backdrop.generation() as u32
    }

    pub fn meteor_count(&self) -> u32 {
        self.backdrop.snapshot().meteors.len() as u32
    }

    // ---- Section offsets (read once by the TypeScript reader) ----

    pub fn star_offset(&self) -> u32 {
        self.buffer.layout().star_offset as u32
    }

    pub fn constellation_offset(&self) -> u32 {
        self.buffer.layout().constellation_offset as u32
    }

    pub fn nebula_offset(&self) -> u32 {
        self.buffer.layout().nebula_offset as u32
    }

    pub fn meteor_offset(&self) -> u32 {
        self.buffer.layout().meteor_offset as u32
    }
}
