use spark_engine::{EmitterSettings, EngineConfig};

const WORLD_W: f32 = 1280.0;
const WORLD_H: f32 = 720.0;

/// Pointer-following fountain: five particles every 20 ms, falling under
/// gravity toward the bottom edge. Keys: `=`/`-` resize, `1`/`2` switch mode.
pub fn config() -> EngineConfig {
    EngineConfig {
        world_width: WORLD_W,
        world_height: WORLD_H,
        gravity: -150.0,
        initial_particle_size: 3,
        emitter: EmitterSettings::default(),
        ..EngineConfig::default()
    }
}
