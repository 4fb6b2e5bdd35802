//! The simulation driver.
//!
//! `World` owns the particle sets, the registered agents and the seek
//! controller, and advances them once per host frame through
//! [`World::step`]. It has no timer of its own.

use crate::model::clock::Clock;
use crate::model::config::SimConfig;
use crate::model::metrics::Metrics;
use crate::model::seek::SeekController;
use crate::model::snapshot::Snapshot;
use rand_chacha::ChaCha8Rng;
use shoal_data::{
    Agent, AgentId, AgentView, BoundingBox, FallingParticle, RisingParticle, RunState,
};
use std::collections::BTreeMap;

pub mod init;
pub mod logic;
pub mod update;

pub struct World {
    pub config: SimConfig,
    pub metrics: Metrics,
    clock: Clock,
    state: RunState,
    falling: Vec<FallingParticle>,
    rising: Vec<RisingParticle>,
    agents: BTreeMap<AgentId, Agent>,
    /// Boxes supplied since the last step; consumed by the next one.
    staged_boxes: BTreeMap<AgentId, BoundingBox>,
    seek: SeekController,
    rng: ChaCha8Rng,
    next_agent_id: AgentId,
}

impl World {
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.state == RunState::Stopped
    }

    /// Pellets in spawn order.
    #[must_use]
    pub fn falling_particles(&self) -> &[FallingParticle] {
        &self.falling
    }

    /// Bubbles in spawn order.
    #[must_use]
    pub fn rising_particles(&self) -> &[RisingParticle] {
        &self.rising
    }

    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Registered agents with their live depth, ordered by id.
    pub fn agents(&self) -> impl Iterator<Item = AgentView> + '_ {
        self.agents.values().map(|agent| AgentView {
            id: agent.id,
            baseline: agent.baseline,
            depth: self.seek.depth(agent.id).unwrap_or(agent.baseline),
        })
    }

    /// Last host timestamp seen by [`World::step`].
    #[must_use]
    pub fn last_frame_ms(&self) -> Option<f64> {
        self.clock.last()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            falling: self.falling.clone(),
            rising: self.rising.clone(),
            agents: self.agents().collect(),
        }
    }
}
