//! Particle creation with injectable randomness.
//!
//! Spawn functions take any [`rand::Rng`], so tests pass a seeded
//! `ChaCha8Rng` and get reproducible batches. Ids come from a process-wide
//! counter and are never reused, which keeps falling and rising ids disjoint.

use crate::config::{FallingConfig, RisingConfig};
use crate::error::{Result, SimError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use shoal_data::{FallingParticle, ParticleId, RisingParticle};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PARTICLE_ID: AtomicU64 = AtomicU64::new(1);

/// Claims the next process-wide particle id.
pub fn next_particle_id() -> ParticleId {
    NEXT_PARTICLE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Closed interval `[min, max]`, written as a two-element array in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct SpawnRange {
    pub min: f64,
    pub max: f64,
}

impl From<[f64; 2]> for SpawnRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<SpawnRange> for [f64; 2] {
    fn from(range: SpawnRange) -> Self {
        [range.min, range.max]
    }
}

impl SpawnRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Rejects `min > max` and non-finite bounds. Never clamps.
    pub fn check(&self, name: &'static str) -> Result<()> {
        if self.min.is_finite() && self.max.is_finite() && self.min <= self.max {
            Ok(())
        } else {
            Err(SimError::invalid_range(name, self.min, self.max))
        }
    }

    /// Like [`SpawnRange::check`], and also requires `min > 0`.
    pub fn check_positive(&self, name: &'static str) -> Result<()> {
        self.check(name)?;
        if self.min > 0.0 {
            Ok(())
        } else {
            Err(SimError::invalid_range(name, self.min, self.max))
        }
    }

    /// Speed ranges: a magnitude, so `min >= 0`. Zero parks the particle.
    pub fn check_speed(&self, name: &'static str) -> Result<()> {
        self.check(name)?;
        if self.min >= 0.0 {
            Ok(())
        } else {
            Err(SimError::invalid_range(name, self.min, self.max))
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Uniform sample. Callers must have run [`SpawnRange::check`].
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.min == self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

/// A feed request: `count` pellets at independent random columns and speeds.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingSpawn {
    pub count: usize,
    pub x_range: SpawnRange,
    pub velocity_range: SpawnRange,
    pub size: f64,
    pub start_y: f64,
}

impl FallingSpawn {
    /// Request pre-filled with the configured ranges; override fields as needed.
    pub fn from_config(config: &FallingConfig, count: usize) -> Self {
        Self {
            count,
            x_range: config.x_range,
            velocity_range: config.velocity_range,
            size: config.size,
            start_y: config.start_y,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.x_range.check("x_range")?;
        self.velocity_range.check_speed("velocity_range")?;
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(SimError::invalid_parameter("size", self.size));
        }
        if !self.start_y.is_finite() {
            return Err(SimError::invalid_parameter("start_y", self.start_y));
        }
        Ok(())
    }
}

/// A blow request: `count` bubbles released near `start_y`.
#[derive(Debug, Clone, PartialEq)]
pub struct RisingSpawn {
    pub count: usize,
    pub start_y: f64,
    pub x_range: SpawnRange,
    pub velocity_range: SpawnRange,
    pub size_range: SpawnRange,
    pub opacity_range: SpawnRange,
    pub start_jitter: f64,
}

impl RisingSpawn {
    pub fn from_config(config: &RisingConfig, count: usize, start_y: f64) -> Self {
        Self {
            count,
            start_y,
            x_range: config.x_range,
            velocity_range: config.velocity_range,
            size_range: config.size_range,
            opacity_range: config.opacity_range,
            start_jitter: config.start_jitter,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.x_range.check("x_range")?;
        self.velocity_range.check_speed("velocity_range")?;
        self.size_range.check_positive("size_range")?;
        self.opacity_range.check("opacity_range")?;
        SpawnRange::new(0.0, self.start_jitter).check("start_jitter")?;
        if !self.start_y.is_finite() {
            return Err(SimError::invalid_parameter("start_y", self.start_y));
        }
        Ok(())
    }
}

/// Builds a batch of pellets. Validation happens before any id is claimed,
/// so a rejected request spawns nothing.
pub fn spawn_falling<R: Rng>(request: &FallingSpawn, rng: &mut R) -> Result<Vec<FallingParticle>> {
    request.validate()?;
    let particles = (0..request.count)
        .map(|_| FallingParticle {
            id: next_particle_id(),
            x_pct: request.x_range.sample(rng),
            y: request.start_y,
            velocity: request.velocity_range.sample(rng),
            size: request.size,
        })
        .collect();
    Ok(particles)
}

pub fn spawn_rising<R: Rng>(request: &RisingSpawn, rng: &mut R) -> Result<Vec<RisingParticle>> {
    request.validate()?;
    let jitter = SpawnRange::new(0.0, request.start_jitter);
    let particles = (0..request.count)
        .map(|_| RisingParticle {
            id: next_particle_id(),
            x_pct: request.x_range.sample(rng),
            y: request.start_y + jitter.sample(rng),
            velocity: request.velocity_range.sample(rng),
            size: request.size_range.sample(rng),
            opacity: request.opacity_range.sample(rng),
        })
        .collect();
    Ok(particles)
}
