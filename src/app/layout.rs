//! Stand-in for the on-screen layout: turns agent depths into boxes.
//!
//! A real host reads boxes from its renderer. Headless runs sweep each fish
//! back and forth across the tank so it crosses pellet columns.

use crate::model::world::World;
use shoal_data::{AgentId, BoundingBox};

#[derive(Debug, Clone)]
pub struct SwimLayout {
    /// Box size in px.
    pub fish_width: f64,
    pub fish_height: f64,
    /// Horizontal sweep speed in radians per second.
    pub sweep_speed: f64,
}

impl Default for SwimLayout {
    fn default() -> Self {
        Self {
            fish_width: 48.0,
            fish_height: 24.0,
            sweep_speed: 0.6,
        }
    }
}

impl SwimLayout {
    /// Box of an agent at `depth` percent, centred at `center_x` px.
    #[must_use]
    pub fn agent_box(&self, container_height: f64, center_x: f64, depth: f64) -> BoundingBox {
        let center_y = container_height * depth / 100.0;
        BoundingBox::new(
            center_x - self.fish_width / 2.0,
            center_y - self.fish_height / 2.0,
            center_x + self.fish_width / 2.0,
            center_y + self.fish_height / 2.0,
        )
    }

    /// Boxes for every registered agent at host time `seconds`.
    pub fn boxes(&self, world: &World, seconds: f64) -> Vec<(AgentId, BoundingBox)> {
        let width = world.config.container.width;
        let height = world.config.container.height;
        world
            .agents()
            .enumerate()
            .map(|(lane, view)| {
                let phase = lane as f64 * 1.7;
                let center_x = width * (0.5 + 0.4 * (seconds * self.sweep_speed + phase).sin());
                (view.id, self.agent_box(height, center_x, view.depth))
            })
            .collect()
    }
}
