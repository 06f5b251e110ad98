use spark_engine::bridge::protocol::{
    HEADER_EVICTED_TOTAL, HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT,
    HEADER_LIVE_PARTICLES, HEADER_MAX_INSTANCES, HEADER_PARTICLE_SIZE, HEADER_PROTOCOL_VERSION,
    HEADER_TICK_COUNTER, HEADER_VIEWPORT_HEIGHT, HEADER_VIEWPORT_WIDTH, HEADER_VISUAL_MODE,
    PROTOCOL_VERSION,
};
use spark_engine::{
    build_render_buffer, EngineConfig, FixedTimestep, InputEvent, ParticleEngine, ProtocolLayout,
    RenderBuffer, StepStats,
};

/// Wires the particle engine to a browser frame loop.
///
/// Each demo keeps one runner in a `thread_local!` and exports free functions
/// via `#[wasm_bindgen]` (see `export_engine!`), because wasm-bindgen cannot
/// export the engine types directly. Ticks and buffer reads alternate on the
/// single JS thread, so the host never observes a half-built frame.
pub struct EngineRunner {
    engine: ParticleEngine,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    viewport: (f32, f32),
    frame_counter: u32,
    tick_counter: u32,
    evicted_total: u64,
    last_stats: StepStats,
}

impl EngineRunner {
    pub fn new(config: EngineConfig) -> Self {
        let engine = ParticleEngine::new(config);
        let config = engine.config();
        let layout = ProtocolLayout::from_config(config);
        let timestep = FixedTimestep::with_max_steps(config.fixed_dt, config.max_steps_per_frame);
        let viewport = (config.world_width, config.world_height);

        let mut runner = Self {
            render_buffer: RenderBuffer::with_capacity(layout.max_instances),
            timestep,
            layout,
            header: [0.0; HEADER_FLOATS],
            viewport,
            frame_counter: 0,
            tick_counter: 0,
            evicted_total: 0,
            last_stats: StepStats::default(),
            engine,
        };
        runner.write_header();
        runner
    }

    /// Build a runner from a host-supplied JSON config. Falls back to the
    /// defaults (and logs why) when the JSON does not parse.
    pub fn from_json(json: &str) -> Self {
        let config = match EngineConfig::from_json(json) {
            Ok(config) => config,
            Err(err) => {
                log::error!("invalid engine config, using defaults: {}", err);
                EngineConfig::default()
            }
        };
        Self::new(config)
    }

    /// Queue an input event for the next fixed tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.engine.push_input(event);
    }

    /// Track the render surface size. Non-positive sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = (width, height);
        } else {
            log::warn!("ignoring viewport size {}x{}", width, height);
        }
    }

    /// Run one host frame: as many fixed ticks as the elapsed time allows,
    /// then rebuild the render buffer and header. Returns the tick count.
    pub fn tick(&mut self, frame_dt: f32) -> u32 {
        let steps = self.timestep.accumulate(frame_dt);
        let dt = self.timestep.dt();
        for _ in 0..steps {
            let height = self.current_viewport_height();
            let stats = self.engine.tick(dt, height);
            self.evicted_total += stats.evicted as u64;
            self.last_stats = stats;
        }
        self.tick_counter = self.tick_counter.wrapping_add(steps);
        self.frame_counter = self.frame_counter.wrapping_add(1);

        build_render_buffer(self.engine.simulation().particles().iter(), &mut self.render_buffer);
        self.write_header();
        steps
    }

    fn current_viewport_height(&self) -> f32 {
        self.viewport.1
    }

    fn write_header(&mut self) {
        let settings = self.engine.settings();
        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        h[HEADER_MAX_INSTANCES] = self.layout.max_instances as f32;
        h[HEADER_INSTANCE_COUNT] = self.render_buffer.instance_count() as f32;
        h[HEADER_VIEWPORT_WIDTH] = self.viewport.0;
        h[HEADER_VIEWPORT_HEIGHT] = self.viewport.1;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_PARTICLE_SIZE] = settings.particle_size() as f32;
        h[HEADER_VISUAL_MODE] = settings.visual_mode.as_f32();
        h[HEADER_LIVE_PARTICLES] = self.engine.simulation().len() as f32;
        h[HEADER_EVICTED_TOTAL] = self.evicted_total as f32;
        h[HEADER_TICK_COUNTER] = self.tick_counter as f32;
    }

    pub fn engine(&self) -> &ParticleEngine {
        &self.engine
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn last_stats(&self) -> StepStats {
        self.last_stats
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    // ---- Pointer accessors for host-side reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport.0
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport.1
    }

    pub fn particle_size(&self) -> u32 {
        self.engine.settings().particle_size()
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
