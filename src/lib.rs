pub mod app;
pub mod model;

pub use crate::model::config::SimConfig;
pub use crate::model::world::World;
