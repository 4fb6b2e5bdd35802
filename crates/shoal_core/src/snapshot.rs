//! Render-facing copy of the simulation state.

use serde::{Deserialize, Serialize};
use shoal_data::{AgentView, FallingParticle, RisingParticle, RunState};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: RunState,
    pub falling: Vec<FallingParticle>,
    pub rising: Vec<RisingParticle>,
    /// Ordered by agent id.
    pub agents: Vec<AgentView>,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
