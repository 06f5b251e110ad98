use crate::api::config::EngineConfig;
use crate::components::emitter::Emitter;
use crate::core::settings::RuntimeConfig;
use crate::input::intent::{Intent, KeyBindings};
use crate::input::queue::{InputEvent, InputQueue};
use crate::systems::particles::{Simulation, StepStats};

/// Owns everything one running particle system needs: runtime settings, the
/// pending input and the simulation. Hosts push input at any time and call
/// `tick` once per fixed step.
pub struct ParticleEngine {
    config: EngineConfig,
    settings: RuntimeConfig,
    bindings: KeyBindings,
    input: InputQueue,
    simulation: Simulation,
}

impl ParticleEngine {
    pub fn new(config: EngineConfig) -> Self {
        let config = config.sanitized();
        let settings = config.runtime_config();
        let emitter = Emitter::new(config.emitter.clone(), config.seed);
        let simulation = Simulation::new(emitter, config.max_particles);
        Self {
            bindings: config.key_bindings.clone(),
            settings,
            input: InputQueue::new(),
            simulation,
            config,
        }
    }

    /// Queue a raw input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply an intent immediately, bypassing the queue.
    pub fn apply(&mut self, intent: Intent) {
        self.settings.apply(intent);
    }

    /// One fixed step: apply queued input in arrival order, then spawn,
    /// integrate and cull.
    pub fn tick(&mut self, dt: f32, viewport_height: f32) -> StepStats {
        for event in self.input.drain() {
            if let Some(intent) = self.bindings.translate(&event) {
                self.settings.apply(intent);
            }
        }
        self.simulation.step(dt, viewport_height, &self.settings)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn settings(&self) -> &RuntimeConfig {
        &self.settings
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    /// Number of events waiting for the next tick.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

impl Default for ParticleEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
