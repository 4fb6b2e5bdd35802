//! Constant-velocity motion of pellets and bubbles.
//!
//! Each step is resolved against the pre-step agent boxes in a single pass.
//! For pellets the collision check runs before the floor check, so a pellet
//! that would both land and be caught on the same step counts as eaten.

use crate::config::ContainerConfig;
use crate::spatial::{particle_box, BoxSnapshot};
use shoal_data::{AgentId, FallingParticle, RisingParticle, SimEvent};

pub struct KinematicContext<'a> {
    pub container: &'a ContainerConfig,
    pub boxes: &'a BoxSnapshot,
}

/// What happens to one pellet during one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallOutcome {
    Eaten(AgentId),
    Settled,
    Moved(f64),
}

pub fn resolve_fall(particle: &FallingParticle, dt: f64, ctx: &KinematicContext) -> FallOutcome {
    let new_y = particle.y + particle.velocity * dt;
    let probe = particle_box(ctx.container, particle.x_pct, new_y, particle.size);

    if let Some(agent_id) = ctx.boxes.hit_test(&probe) {
        FallOutcome::Eaten(agent_id)
    } else if new_y >= ctx.container.floor_y() - particle.size {
        FallOutcome::Settled
    } else {
        FallOutcome::Moved(new_y)
    }
}

/// Moves every pellet, removing the eaten and the settled. Removal events
/// are appended in set order.
pub fn advance_falling(
    particles: &mut Vec<FallingParticle>,
    dt: f64,
    ctx: &KinematicContext,
    events: &mut Vec<SimEvent>,
) {
    particles.retain_mut(|p| match resolve_fall(p, dt, ctx) {
        FallOutcome::Eaten(agent_id) => {
            events.push(SimEvent::ParticleEaten {
                particle_id: p.id,
                agent_id,
            });
            false
        }
        FallOutcome::Settled => {
            events.push(SimEvent::ParticleSettled { particle_id: p.id });
            false
        }
        FallOutcome::Moved(y) => {
            p.y = y;
            true
        }
    });
}

/// Moves every bubble upward, removing those past the top edge.
pub fn advance_rising(particles: &mut Vec<RisingParticle>, dt: f64, events: &mut Vec<SimEvent>) {
    particles.retain_mut(|b| {
        let new_y = b.y - b.velocity * dt;
        if new_y <= -b.size {
            events.push(SimEvent::BubbleSurfaced { particle_id: b.id });
            false
        } else {
            b.y = new_y;
            true
        }
    });
}
