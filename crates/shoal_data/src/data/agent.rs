use serde::{Deserialize, Serialize};

pub type AgentId = u64;

/// Axis-aligned rectangle in container px, `top < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box of a round particle whose centre column sits at `center_x`
    /// and whose top edge sits at `top`.
    pub fn around_column(center_x: f64, top: f64, size: f64) -> Self {
        let half = size / 2.0;
        Self {
            left: center_x - half,
            top,
            right: center_x + half,
            bottom: top + size,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A registered swimmer (a fish). Its live depth is owned by the seek
/// controller, not stored here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    /// Cruising depth in percent of container height.
    pub baseline: f64,
}

/// Render-facing view of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub baseline: f64,
    /// Current seek-driven depth in percent of container height.
    pub depth: f64,
}
