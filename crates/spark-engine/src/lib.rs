pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::EngineConfig;
pub use api::engine::ParticleEngine;
pub use api::types::{Rgb, VisualMode};
pub use components::emitter::{Emitter, EmitterSettings, SpawnRequest};
pub use crate::core::settings::RuntimeConfig;
pub use crate::core::time::FixedTimestep;
pub use input::intent::{Intent, KeyAction, KeyBindings};
pub use input::queue::{InputEvent, InputQueue};
pub use systems::particles::{Liveness, Particle, ParticleView, Rng, Simulation, StepStats};
pub use systems::render::build_render_buffer;
pub use renderer::instance::{ParticleInstance, RenderBuffer};
pub use bridge::protocol::ProtocolLayout;
