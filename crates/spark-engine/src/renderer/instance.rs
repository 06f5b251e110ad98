use bytemuck::{Pod, Zeroable};

/// Per-particle render data read by the host renderer.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// X position in world space (y-up).
    pub x: f32,
    /// Y position in world space (y-up).
    pub y: f32,
    /// Rendered radius in world units.
    pub size: f32,
    /// Red, 0.0 to 1.0.
    pub r: f32,
    /// Green, 0.0 to 1.0.
    pub g: f32,
    /// Blue, 0.0 to 1.0.
    pub b: f32,
    /// Opacity. Particles are always opaque; fading is baked into the color.
    pub alpha: f32,
    /// Visual mode tag (0 = fading, 1 = color shift).
    pub mode: f32,
}

impl ParticleInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Particle instances for the current frame, bounded by a fixed capacity.
pub struct RenderBuffer {
    instances: Vec<ParticleInstance>,
    capacity: usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append an instance. Returns false (and drops it) once the buffer is full.
    pub fn push(&mut self, instance: ParticleInstance) -> bool {
        if self.instances.len() >= self.capacity {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
        assert_eq!(ParticleInstance::FLOATS, 8);
    }

    #[test]
    fn push_respects_capacity() {
        let mut buf = RenderBuffer::with_capacity(2);
        assert!(buf.push(ParticleInstance::default()));
        assert!(buf.push(ParticleInstance::default()));
        assert!(!buf.push(ParticleInstance::default()));
        assert_eq!(buf.instance_count(), 2);
    }

    #[test]
    fn floats_follow_field_order() {
        let mut buf = RenderBuffer::with_capacity(1);
        buf.push(ParticleInstance { x: 1.0, y: 2.0, size: 3.0, r: 0.5, g: 0.25, b: 0.0, alpha: 1.0, mode: 1.0 });
        assert_eq!(buf.as_floats(), &[1.0, 2.0, 3.0, 0.5, 0.25, 0.0, 1.0, 1.0]);
    }
}
