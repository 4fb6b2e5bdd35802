use crate::app::layout::SwimLayout;
use crate::model::config::SimConfig;
use crate::model::world::World;
use anyhow::Result;

/// Knobs for a headless run. Frame counts are in host frames.
#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub frames: u64,
    pub fps: f64,
    pub agents: usize,
    /// Drop a feed every this many frames; 0 disables feeding.
    pub feed_every: u64,
    pub feed_count: usize,
    pub bubble_every: u64,
    pub bubble_count: usize,
    /// Pause at this frame for `pause_frames` frames.
    pub pause_at: Option<u64>,
    pub pause_frames: u64,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            frames: 600,
            fps: 60.0,
            agents: 3,
            feed_every: 120,
            feed_count: 6,
            bubble_every: 90,
            bubble_count: 3,
            pause_at: None,
            pause_frames: 0,
        }
    }
}

pub struct App {
    pub running: bool,
    pub world: World,
    pub options: HeadlessOptions,
    pub layout: SwimLayout,
    pub frame_count: u64,
    /// Synthetic host clock in milliseconds.
    pub now_ms: f64,
}

impl App {
    pub fn new(config: SimConfig, options: HeadlessOptions) -> Result<Self> {
        anyhow::ensure!(options.fps > 0.0, "FPS must be positive");
        let mut world = World::new(config)?;
        for _ in 0..options.agents {
            world.spawn_agent()?;
        }

        Ok(Self {
            running: true,
            world,
            options,
            layout: SwimLayout::default(),
            frame_count: 0,
            now_ms: 0.0,
        })
    }
}
