//! Depth steering for agents.
//!
//! While pellets exist every agent heads for the pellet nearest its own
//! depth at `seek_rate`; once the water is empty it drifts home to its
//! baseline at the slower `relax_rate`. Both use the same rate-limited
//! linear step, which never overshoots and crosses a fixed distance in the
//! same time whatever the frame length.

use crate::config::SeekConfig;
use shoal_data::{Agent, AgentId, FallingParticle};
use std::collections::HashMap;

/// Moves `current` toward `target` by at most `max_step`.
#[inline]
#[must_use]
pub fn rate_limited_step(current: f64, target: f64, max_step: f64) -> f64 {
    let delta = target - current;
    if delta.abs() < max_step {
        target
    } else {
        current + delta.signum() * max_step
    }
}

/// Pellet closest to `depth_px` along the vertical axis. Ties keep the
/// earlier pellet.
#[must_use]
pub fn nearest_particle(particles: &[FallingParticle], depth_px: f64) -> Option<&FallingParticle> {
    let mut best: Option<(&FallingParticle, f64)> = None;
    for p in particles {
        let dist = (p.y - depth_px).abs();
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((p, dist)),
        }
    }
    best.map(|(p, _)| p)
}

/// Owns every agent's live depth (percent of container height).
#[derive(Debug, Clone)]
pub struct SeekController {
    depths: HashMap<AgentId, f64>,
    config: SeekConfig,
}

impl SeekController {
    pub fn new(config: SeekConfig) -> Self {
        Self {
            depths: HashMap::new(),
            config,
        }
    }

    /// Live depth, if the agent has been seen by [`SeekController::update`].
    #[must_use]
    pub fn depth(&self, id: AgentId) -> Option<f64> {
        self.depths.get(&id).copied()
    }

    /// Drops the agent's entry. Must be called when an agent is removed.
    pub fn forget(&mut self, id: AgentId) -> Option<f64> {
        self.depths.remove(&id)
    }

    #[must_use]
    pub fn tracked(&self) -> usize {
        self.depths.len()
    }

    /// Target depth for an agent at `current`, and the rate to approach it.
    fn target_for(
        &self,
        agent: &Agent,
        current: f64,
        falling: &[FallingParticle],
        container_height: f64,
    ) -> (f64, f64) {
        let depth_px = container_height * (current / 100.0);
        match nearest_particle(falling, depth_px) {
            Some(p) => {
                let target = (p.y / container_height * 100.0)
                    .clamp(self.config.min_depth, self.config.max_depth);
                (target, self.config.seek_rate)
            }
            None => (agent.baseline, self.config.relax_rate),
        }
    }

    /// Advances every agent's depth by one step of `dt` seconds.
    ///
    /// `falling` must already reflect this step's kinematics. Agents seen for
    /// the first time start at their baseline.
    pub fn update<'a, I>(&mut self, agents: I, falling: &[FallingParticle], container_height: f64, dt: f64)
    where
        I: IntoIterator<Item = &'a Agent>,
    {
        for agent in agents {
            let current = self.depths.get(&agent.id).copied().unwrap_or(agent.baseline);
            let (target, rate) = self.target_for(agent, current, falling, container_height);
            let next = rate_limited_step(current, target, rate * dt);
            self.depths.insert(agent.id, next);
        }
    }
}
