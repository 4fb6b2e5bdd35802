//! Plain data types shared between the simulation core and its hosts.
//!
//! Nothing in here advances time or owns randomness; it is the numeric
//! surface a renderer reads and a driver mutates.

pub mod data;

pub use data::agent::{Agent, AgentId, AgentView, BoundingBox};
pub use data::event::SimEvent;
pub use data::particle::{FallingParticle, ParticleId, RisingParticle};
pub use data::state::RunState;
