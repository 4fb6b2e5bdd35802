pub use shoal_core::{BoxSnapshot, Clock, Metrics, SeekController, SimConfig, SimError};
pub mod clock {
    pub use shoal_core::clock::*;
}
pub mod config {
    pub use shoal_core::config::*;
}
pub mod error {
    pub use shoal_core::error::*;
}
pub mod kinematics {
    pub use shoal_core::kinematics::*;
}
pub mod metrics {
    pub use shoal_core::metrics::*;
}
pub mod seek {
    pub use shoal_core::seek::*;
}
pub mod snapshot {
    pub use shoal_core::snapshot::*;
}
pub mod spatial {
    pub use shoal_core::spatial::*;
}
pub mod spawn {
    pub use shoal_core::spawn::*;
}
pub mod state {
    pub use shoal_data::*;
}

pub mod world;
