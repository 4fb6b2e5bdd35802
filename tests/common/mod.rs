pub mod macros;

use shoal_lib::model::config::{ContainerConfig, SimConfig};
use shoal_lib::model::spawn::SpawnRange;
use shoal_lib::model::state::{AgentId, BoundingBox, ParticleId};
use shoal_lib::World;

#[allow(dead_code)]
pub struct WorldBuilder {
    config: SimConfig,
    agents: Vec<(AgentId, f64)>,
    pellets: Vec<(f64, f64, f64)>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            config: SimConfig {
                seed: Some(42),
                ..Default::default()
            },
            agents: Vec::new(),
            pellets: Vec::new(),
        }
    }

    pub fn with_container(mut self, width: f64, height: f64, gravel_height: f64) -> Self {
        self.config.container = ContainerConfig {
            width,
            height,
            gravel_height,
        };
        self
    }

    pub fn with_max_dt(mut self, max_dt: f64) -> Self {
        self.config.clock.max_dt = max_dt;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_agent(mut self, id: AgentId, baseline: f64) -> Self {
        self.agents.push((id, baseline));
        self
    }

    /// A pellet at an exact column, height and speed.
    pub fn with_pellet(mut self, x_pct: f64, y: f64, velocity: f64) -> Self {
        self.pellets.push((x_pct, y, velocity));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world");
        for (id, baseline) in self.agents {
            world
                .register_agent(id, baseline)
                .expect("Failed to register agent");
        }
        for (x_pct, y, velocity) in self.pellets {
            drop_pellet(&mut world, x_pct, y, velocity);
        }
        world
    }
}

/// Spawns one pellet with degenerate ranges so its state is exact.
#[allow(dead_code)]
pub fn drop_pellet(world: &mut World, x_pct: f64, y: f64, velocity: f64) -> ParticleId {
    let mut request = world.falling_request(1);
    request.x_range = SpawnRange::new(x_pct, x_pct);
    request.velocity_range = SpawnRange::new(velocity, velocity);
    request.start_y = y;
    world.spawn_falling(&request).expect("Failed to spawn pellet")[0]
}

/// A box covering the whole container, catching every pellet.
#[allow(dead_code)]
pub fn net(world: &World) -> BoundingBox {
    let c = &world.config.container;
    BoundingBox::new(-10.0, -100.0, c.width + 10.0, c.height + 100.0)
}
