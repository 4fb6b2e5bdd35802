//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration that maps to a `shoal.toml` file. Every
//! numeric range the simulation uses lives here so hosts can override it
//! without touching code.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (`Default` impls)
//! 2. TOML file (overrides defaults; missing sections keep their defaults)
//! 3. Per-call overrides through [`crate::spawn::FallingSpawn`] and
//!    [`crate::spawn::RisingSpawn`]
//!
//! ## Example `shoal.toml`
//!
//! ```toml
//! seed = 42
//!
//! [container]
//! width = 800.0
//! height = 400.0
//! gravel_height = 40.0
//!
//! [seek]
//! seek_rate = 60.0
//! relax_rate = 20.0
//!
//! [falling]
//! velocity_range = [120.0, 160.0]
//! ```

use crate::spawn::SpawnRange;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container geometry in px.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ContainerConfig {
    pub width: f64,
    pub height: f64,
    /// Height of the gravel strip at the bottom; pellets vanish on reaching it.
    pub gravel_height: f64,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            gravel_height: 40.0,
        }
    }
}

impl ContainerConfig {
    /// Top edge of the gravel strip.
    #[inline]
    #[must_use]
    pub fn floor_y(&self) -> f64 {
        self.height - self.gravel_height
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Upper bound on a single step, in seconds.
    pub max_dt: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { max_dt: 0.05 }
    }
}

/// Rates are in percentage points of container height per second.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SeekConfig {
    pub seek_rate: f64,
    pub relax_rate: f64,
    pub min_depth: f64,
    pub max_depth: f64,
}

impl Default for SeekConfig {
    fn default() -> Self {
        Self {
            seek_rate: 60.0,
            relax_rate: 20.0,
            min_depth: 5.0,
            max_depth: 95.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FallingConfig {
    pub x_range: SpawnRange,
    pub velocity_range: SpawnRange,
    pub size: f64,
    /// Spawn height, just above the visible region.
    pub start_y: f64,
}

impl Default for FallingConfig {
    fn default() -> Self {
        Self {
            x_range: SpawnRange::new(4.0, 96.0),
            velocity_range: SpawnRange::new(120.0, 160.0),
            size: 6.0,
            start_y: -8.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RisingConfig {
    pub x_range: SpawnRange,
    pub velocity_range: SpawnRange,
    pub size_range: SpawnRange,
    pub opacity_range: SpawnRange,
    /// Bubbles start up to this many px below the requested height.
    pub start_jitter: f64,
}

impl Default for RisingConfig {
    fn default() -> Self {
        Self {
            x_range: SpawnRange::new(2.0, 98.0),
            velocity_range: SpawnRange::new(120.0, 170.0),
            size_range: SpawnRange::new(6.0, 14.0),
            opacity_range: SpawnRange::new(0.7, 0.98),
            start_jitter: 10.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    /// Allowed cruising depths, percent of container height.
    pub baseline_range: SpawnRange,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            baseline_range: SpawnRange::new(18.0, 82.0),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for spawn randomness. `None` seeds from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub container: ContainerConfig,
    pub clock: ClockConfig,
    pub seek: SeekConfig,
    pub falling: FallingConfig,
    pub rising: RisingConfig,
    pub agents: AgentConfig,
}

fn ensure_range(range: &SpawnRange, name: &str) -> anyhow::Result<()> {
    anyhow::ensure!(
        range.min.is_finite() && range.max.is_finite(),
        "{name} bounds must be finite"
    );
    anyhow::ensure!(
        range.min <= range.max,
        "{name} min {} exceeds max {}",
        range.min,
        range.max
    );
    Ok(())
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // Container
        anyhow::ensure!(self.container.width > 0.0, "Container width must be positive");
        anyhow::ensure!(
            self.container.height > 0.0,
            "Container height must be positive"
        );
        anyhow::ensure!(
            self.container.gravel_height >= 0.0
                && self.container.gravel_height < self.container.height,
            "Gravel height must be in [0, container height)"
        );

        anyhow::ensure!(self.clock.max_dt > 0.0, "Max dt must be positive");

        // Seek
        anyhow::ensure!(self.seek.seek_rate > 0.0, "Seek rate must be positive");
        anyhow::ensure!(self.seek.relax_rate > 0.0, "Relax rate must be positive");
        anyhow::ensure!(
            self.seek.min_depth >= 0.0
                && self.seek.max_depth <= 100.0
                && self.seek.min_depth <= self.seek.max_depth,
            "Depth clamp must satisfy 0 <= min_depth <= max_depth <= 100"
        );

        // Falling
        ensure_range(&self.falling.x_range, "falling.x_range")?;
        ensure_range(&self.falling.velocity_range, "falling.velocity_range")?;
        anyhow::ensure!(
            self.falling.velocity_range.min >= 0.0,
            "Falling velocities must be non-negative"
        );
        anyhow::ensure!(self.falling.size > 0.0, "Falling size must be positive");
        anyhow::ensure!(
            self.falling.start_y.is_finite(),
            "Falling start_y must be finite"
        );

        // Rising
        ensure_range(&self.rising.x_range, "rising.x_range")?;
        ensure_range(&self.rising.velocity_range, "rising.velocity_range")?;
        anyhow::ensure!(
            self.rising.velocity_range.min >= 0.0,
            "Rising velocities must be non-negative"
        );
        ensure_range(&self.rising.size_range, "rising.size_range")?;
        ensure_range(&self.rising.opacity_range, "rising.opacity_range")?;
        anyhow::ensure!(
            self.rising.size_range.min > 0.0,
            "Rising sizes must be positive"
        );
        anyhow::ensure!(
            self.rising.start_jitter >= 0.0,
            "Rising start jitter must be non-negative"
        );

        // Agents
        ensure_range(&self.agents.baseline_range, "agents.baseline_range")?;
        anyhow::ensure!(
            self.agents.baseline_range.min >= self.seek.min_depth
                && self.agents.baseline_range.max <= self.seek.max_depth,
            "Baseline range must lie inside the depth clamp"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Stable hash of every parameter that influences simulation output.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.container).as_bytes());
        hasher.update(format!("{:?}", self.clock).as_bytes());
        hasher.update(format!("{:?}", self.seek).as_bytes());
        hasher.update(format!("{:?}", self.falling).as_bytes());
        hasher.update(format!("{:?}", self.rising).as_bytes());
        hasher.update(format!("{:?}", self.agents).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.container.floor_y(), 360.0);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = SimConfig {
            falling: FallingConfig {
                velocity_range: SpawnRange::new(160.0, 120.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sinking_bubbles_rejected() {
        let result = SimConfig::from_toml(
            r#"
            [rising]
            velocity_range = [-20.0, 10.0]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_gravel_taller_than_container_rejected() {
        let config = SimConfig {
            container: ContainerConfig {
                gravel_height: 500.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_baseline_outside_clamp_rejected() {
        let config = SimConfig {
            agents: AgentConfig {
                baseline_range: SpawnRange::new(2.0, 82.0),
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimConfig::from_toml(
            r#"
            seed = 7

            [container]
            height = 600.0

            [falling]
            velocity_range = [100, 110]
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.container.height, 600.0);
        assert_eq!(config.container.width, 800.0);
        assert_eq!(config.falling.velocity_range, SpawnRange::new(100.0, 110.0));
        assert_eq!(config.falling.size, 6.0);
        assert_eq!(config.seek.seek_rate, 60.0);
    }

    #[test]
    fn test_invalid_toml_range_rejected() {
        let result = SimConfig::from_toml(
            r#"
            [rising]
            opacity_range = [0.9, 0.1]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SimConfig {
            seed: Some(11),
            ..Default::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(SimConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_fingerprint_consistency() {
        let config1 = SimConfig::default();
        let mut config2 = SimConfig::default();
        assert_eq!(config1.fingerprint(), config2.fingerprint());

        config2.seek.relax_rate = 30.0;
        assert_ne!(config1.fingerprint(), config2.fingerprint());
    }
}
