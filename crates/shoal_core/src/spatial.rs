//! Hit testing between particle boxes and the per-step agent box snapshot.
//!
//! Agent counts are small (a handful of fish), so a linear scan over a
//! sorted vector beats any grid here and keeps hit order deterministic.

use crate::config::ContainerConfig;
use shoal_data::{AgentId, BoundingBox};

/// Strict overlap: boxes that only share an edge do not touch.
#[inline]
#[must_use]
pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.left < b.right && a.right > b.left && a.top < b.bottom && a.bottom > b.top
}

/// Box of a particle at `x_pct` (percent of width) with its top edge at `y`.
#[inline]
#[must_use]
pub fn particle_box(container: &ContainerConfig, x_pct: f64, y: f64, size: f64) -> BoundingBox {
    BoundingBox::around_column(x_pct / 100.0 * container.width, y, size)
}

/// Agent boxes valid for exactly one step, ordered by agent id.
#[derive(Debug, Clone, Default)]
pub struct BoxSnapshot {
    entries: Vec<(AgentId, BoundingBox)>,
}

impl BoxSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(AgentId, BoundingBox)> {
        self.entries.iter()
    }

    /// First agent (lowest id) whose box overlaps `probe`.
    #[must_use]
    pub fn hit_test(&self, probe: &BoundingBox) -> Option<AgentId> {
        self.entries
            .iter()
            .find(|(_, agent_box)| overlaps(agent_box, probe))
            .map(|(id, _)| *id)
    }
}

impl FromIterator<(AgentId, BoundingBox)> for BoxSnapshot {
    fn from_iter<I: IntoIterator<Item = (AgentId, BoundingBox)>>(iter: I) -> Self {
        let mut entries: Vec<_> = iter.into_iter().collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.dedup_by_key(|(id, _)| *id);
        Self { entries }
    }
}
