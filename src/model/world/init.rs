use crate::model::clock::Clock;
use crate::model::config::SimConfig;
use crate::model::metrics::Metrics;
use crate::model::seek::SeekController;
use crate::model::world::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shoal_data::RunState;
use std::collections::BTreeMap;

impl World {
    /// Validates `config` and builds an empty, running world. Spawn
    /// randomness is seeded from `config.seed`, or from OS entropy.
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        let rng = if let Some(seed) = config.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::with_rng(config, rng)
    }

    /// Builds a world drawing spawn randomness from `rng`.
    pub fn with_rng(config: SimConfig, rng: ChaCha8Rng) -> anyhow::Result<Self> {
        config.validate()?;
        tracing::info!(
            width = config.container.width,
            height = config.container.height,
            seed = ?config.seed,
            fingerprint = %config.fingerprint(),
            "World created"
        );

        Ok(Self {
            clock: Clock::new(config.clock.max_dt),
            seek: SeekController::new(config.seek.clone()),
            metrics: Metrics::new(),
            state: RunState::Running,
            falling: Vec::new(),
            rising: Vec::new(),
            agents: BTreeMap::new(),
            staged_boxes: BTreeMap::new(),
            rng,
            next_agent_id: 1,
            config,
        })
    }
}
