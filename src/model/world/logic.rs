use crate::model::error::{Result, SimError};
use crate::model::spawn::{self, FallingSpawn, RisingSpawn};
use crate::model::world::World;
use shoal_data::{Agent, AgentId, BoundingBox, ParticleId, RunState};

impl World {
    /// Registers an agent cruising at `baseline` percent of the container height.
    pub fn register_agent(&mut self, id: AgentId, baseline: f64) -> Result<()> {
        if self.agents.contains_key(&id) {
            return Err(SimError::DuplicateAgent(id));
        }
        let range = self.config.agents.baseline_range;
        if !range.contains(baseline) {
            return Err(SimError::BaselineOutOfRange {
                id,
                baseline,
                min: range.min,
                max: range.max,
            });
        }

        self.agents.insert(id, Agent { id, baseline });
        self.next_agent_id = self.next_agent_id.max(id.saturating_add(1));
        tracing::debug!(agent = id, baseline, "Agent registered");
        Ok(())
    }

    /// Registers an agent with the next free id and a random baseline.
    pub fn spawn_agent(&mut self) -> Result<AgentId> {
        let id = self.next_agent_id;
        let baseline = self.config.agents.baseline_range.sample(&mut self.rng);
        self.register_agent(id, baseline)?;
        Ok(id)
    }

    /// Removes an agent together with its tracked depth and any staged box.
    pub fn unregister_agent(&mut self, id: AgentId) -> Result<Agent> {
        let agent = self
            .agents
            .remove(&id)
            .ok_or(SimError::UnknownAgent(id))?;
        self.seek.forget(id);
        self.staged_boxes.remove(&id);
        tracing::debug!(agent = id, "Agent unregistered");
        Ok(agent)
    }

    /// Supplies the agent's on-screen box for the next step only.
    pub fn update_agent_box(&mut self, id: AgentId, bounds: BoundingBox) -> Result<()> {
        if !self.agents.contains_key(&id) {
            return Err(SimError::UnknownAgent(id));
        }
        self.staged_boxes.insert(id, bounds);
        Ok(())
    }

    /// Live depth in percent of container height. An agent that has not been
    /// stepped yet reports its baseline.
    pub fn agent_coordinate(&self, id: AgentId) -> Result<f64> {
        let agent = self.agents.get(&id).ok_or(SimError::UnknownAgent(id))?;
        Ok(self.seek.depth(id).unwrap_or(agent.baseline))
    }

    /// A feed request pre-filled from the configured pellet ranges.
    #[must_use]
    pub fn falling_request(&self, count: usize) -> FallingSpawn {
        FallingSpawn::from_config(&self.config.falling, count)
    }

    /// A blow request pre-filled from the configured bubble ranges.
    #[must_use]
    pub fn rising_request(&self, count: usize, start_y: f64) -> RisingSpawn {
        RisingSpawn::from_config(&self.config.rising, count, start_y)
    }

    /// Drops a batch of pellets. A rejected request spawns nothing.
    pub fn spawn_falling(&mut self, request: &FallingSpawn) -> Result<Vec<ParticleId>> {
        let batch = spawn::spawn_falling(request, &mut self.rng)?;
        let ids: Vec<_> = batch.iter().map(|p| p.id).collect();
        self.falling.extend(batch);
        tracing::debug!(count = ids.len(), total = self.falling.len(), "Pellets spawned");
        Ok(ids)
    }

    /// Releases a batch of bubbles. A rejected request spawns nothing.
    pub fn spawn_rising(&mut self, request: &RisingSpawn) -> Result<Vec<ParticleId>> {
        let batch = spawn::spawn_rising(request, &mut self.rng)?;
        let ids: Vec<_> = batch.iter().map(|b| b.id).collect();
        self.rising.extend(batch);
        tracing::debug!(count = ids.len(), total = self.rising.len(), "Bubbles spawned");
        Ok(ids)
    }

    /// Toggles between running and paused. No effect once stopped.
    pub fn set_paused(&mut self, paused: bool) {
        let next = match (self.state, paused) {
            (RunState::Stopped, _) => return,
            (_, true) => RunState::Paused,
            (_, false) => RunState::Running,
        };
        if next != self.state {
            tracing::info!(state = ?next, "Simulation state changed");
            self.state = next;
        }
    }

    /// Enters the terminal state. Later steps fail with [`SimError::Stopped`].
    pub fn stop(&mut self) {
        if self.state != RunState::Stopped {
            tracing::info!(steps = self.metrics.step_count(), "Simulation stopped");
            self.state = RunState::Stopped;
            self.staged_boxes.clear();
        }
    }
}
