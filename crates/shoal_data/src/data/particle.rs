use serde::{Deserialize, Serialize};

/// Process-unique particle identifier. Never reused.
pub type ParticleId = u64;

/// A particle descending toward the floor (a food pellet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingParticle {
    pub id: ParticleId,
    /// Horizontal position in percent of container width. Fixed at creation.
    pub x_pct: f64,
    /// Distance in px from the container top.
    pub y: f64,
    /// Fall speed in px/s. Positive moves toward the floor.
    pub velocity: f64,
    /// Diameter in px.
    pub size: f64,
}

/// A particle ascending toward the surface (a bubble).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RisingParticle {
    pub id: ParticleId,
    pub x_pct: f64,
    pub y: f64,
    /// Rise speed in px/s, stored as a positive magnitude.
    pub velocity: f64,
    pub size: f64,
    /// Render-only; the simulation never reads it.
    pub opacity: f64,
}
