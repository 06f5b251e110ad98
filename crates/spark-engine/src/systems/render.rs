use crate::renderer::instance::{ParticleInstance, RenderBuffer};
use crate::systems::particles::Particle;

/// Rebuild the render buffer from the live particles.
/// Particles beyond the buffer's capacity are skipped; returns how many were written.
pub fn build_render_buffer<'a>(particles: impl Iterator<Item = &'a Particle>, buffer: &mut RenderBuffer) -> usize {
    buffer.clear();

    let mut written = 0;
    for p in particles {
        let [r, g, b] = p.color().to_unit();
        let instance = ParticleInstance {
            x: p.position.x,
            y: p.position.y,
            size: p.size(),
            r,
            g,
            b,
            alpha: 1.0,
            mode: p.mode().as_f32(),
        };
        if !buffer.push(instance) {
            break;
        }
        written += 1;
    }
    written
}
