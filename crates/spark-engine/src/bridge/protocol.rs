//! Shared buffer layout between the engine and the host renderer.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values f32):
//! ```text
//! [Header: 12 floats]
//! [Instances: max_instances × 8 floats]
//! ```
//!
//! The header is rewritten after every frame; the host reads capacities and
//! counts from it instead of hardcoding offsets.

use crate::api::config::EngineConfig;
use crate::renderer::instance::ParticleInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_VIEWPORT_WIDTH: usize = 4;
pub const HEADER_VIEWPORT_HEIGHT: usize = 5;
pub const HEADER_PROTOCOL_VERSION: usize = 6;
pub const HEADER_PARTICLE_SIZE: usize = 7;
pub const HEADER_VISUAL_MODE: usize = 8;
pub const HEADER_LIVE_PARTICLES: usize = 9;
pub const HEADER_EVICTED_TOTAL: usize = 10;
pub const HEADER_TICK_COUNTER: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per particle instance (wire format, never changes).
pub const INSTANCE_FLOATS: usize = ParticleInstance::FLOATS;

/// Buffer layout computed from the configured capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum particle instances per frame.
    pub max_instances: usize,
    /// Size of the instance section in floats.
    pub instance_data_floats: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub const UNCAPPED_INSTANCES: usize = 16384;

    pub fn new(max_instances: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let instance_data_offset = HEADER_FLOATS;
        let buffer_total_floats = instance_data_offset + instance_data_floats;
        Self {
            max_instances,
            instance_data_floats,
            instance_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// One instance slot per particle the cap allows. Without a cap, the
    /// render side still needs a bound, so `UNCAPPED_INSTANCES` is used.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_particles.unwrap_or(Self::UNCAPPED_INSTANCES))
    }
}
