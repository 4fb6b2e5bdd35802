use super::agent::AgentId;
use super::particle::ParticleId;
use serde::{Deserialize, Serialize};

/// Particle removals produced by one simulation step, in the order they
/// were resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A falling particle overlapped an agent box.
    ParticleEaten {
        particle_id: ParticleId,
        agent_id: AgentId,
    },
    /// A falling particle reached the floor and vanished.
    ParticleSettled { particle_id: ParticleId },
    /// A rising particle left through the top edge.
    BubbleSurfaced { particle_id: ParticleId },
}

impl SimEvent {
    #[must_use]
    pub fn particle_id(&self) -> ParticleId {
        match *self {
            SimEvent::ParticleEaten { particle_id, .. }
            | SimEvent::ParticleSettled { particle_id }
            | SimEvent::BubbleSurfaced { particle_id } => particle_id,
        }
    }
}
