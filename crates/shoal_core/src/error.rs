//! Error types for shoal_core.
//!
//! Every variant is local and recoverable by the caller: the call that
//! produced it left the simulation untouched.

use shoal_data::AgentId;
use thiserror::Error;

/// Main error type for simulation operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A spawn range with `min > max` (or a NaN bound).
    #[error("Invalid range for {name}: [{min}, {max}]")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    /// A scalar spawn parameter that must be finite and positive.
    #[error("Invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Operation on an agent id that was never registered.
    #[error("Unknown agent: {0}")]
    UnknownAgent(AgentId),

    #[error("Agent already registered: {0}")]
    DuplicateAgent(AgentId),

    #[error("Baseline {baseline} for agent {id} outside [{min}, {max}]")]
    BaselineOutOfRange {
        id: AgentId,
        baseline: f64,
        min: f64,
        max: f64,
    },

    /// The driver was stopped and no longer accepts steps.
    #[error("Simulation stopped")]
    Stopped,
}

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    #[must_use]
    pub fn invalid_range(name: &'static str, min: f64, max: f64) -> Self {
        Self::InvalidRange { name, min, max }
    }

    #[must_use]
    pub fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }

    #[must_use]
    pub fn unknown_agent(id: AgentId) -> Self {
        Self::UnknownAgent(id)
    }
}
