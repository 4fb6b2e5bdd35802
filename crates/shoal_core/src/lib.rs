//! # Shoal Core
//!
//! Frame-rate-independent simulation logic for an aquarium-style scene:
//! pellets fall, bubbles rise, and fish steer their depth toward the
//! nearest pellet.
//!
//! This crate contains the pieces a driver composes once per frame:
//! - A clamped frame clock
//! - Constant-velocity kinematics with consumption on contact
//! - Box hit testing against a per-step agent snapshot
//! - Rate-limited depth steering
//! - Seedable particle spawning
//!
//! ## Example
//!
//! ```
//! use shoal_core::seek::rate_limited_step;
//!
//! // 60 pct/s for one 16 ms frame
//! let next = rate_limited_step(50.0, 80.0, 60.0 * 0.016);
//! assert!(next > 50.0 && next < 80.0);
//! ```

/// Frame clock deriving a clamped per-step delta
pub mod clock;
/// Configuration management for simulation parameters
pub mod config;
/// Error taxonomy for simulation calls
pub mod error;
/// Pellet and bubble motion
pub mod kinematics;
/// Step metrics and structured logging
pub mod metrics;
/// Agent depth steering
pub mod seek;
/// Render-facing state snapshots
pub mod snapshot;
/// Agent box hit testing
pub mod spatial;
/// Particle creation with injectable randomness
pub mod spawn;

pub use clock::Clock;
pub use config::SimConfig;
pub use error::{Result, SimError};
pub use metrics::Metrics;
pub use seek::SeekController;
pub use shoal_data::{
    Agent, AgentId, AgentView, BoundingBox, FallingParticle, ParticleId, RisingParticle,
    RunState, SimEvent,
};
pub use snapshot::Snapshot;
pub use spatial::BoxSnapshot;
pub use spawn::{FallingSpawn, RisingSpawn, SpawnRange};
