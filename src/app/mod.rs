//! Headless host: a synthetic frame loop driving a [`World`].
//!
//! Plays the part of the external collaborators (frame scheduler, layout,
//! input) so the simulation can run without a renderer.

pub mod layout;
pub mod state;

pub use layout::SwimLayout;
pub use state::{App, HeadlessOptions};

use crate::model::snapshot::Snapshot;
use anyhow::Result;
use serde::Serialize;
use shoal_data::SimEvent;

/// Totals of a finished run plus the final render state.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub steps: u64,
    pub eaten: u64,
    pub settled: u64,
    pub surfaced: u64,
    pub snapshot: Snapshot,
}

impl App {
    /// Runs frames until the budget is spent, then stops the world.
    pub fn run(&mut self) -> Result<RunSummary> {
        while self.running && self.frame_count < self.options.frames {
            self.frame()?;
        }
        self.world.stop();
        self.running = false;

        Ok(RunSummary {
            frames: self.frame_count,
            steps: self.world.metrics.step_count(),
            eaten: self.world.metrics.eaten(),
            settled: self.world.metrics.settled(),
            surfaced: self.world.metrics.surfaced(),
            snapshot: self.world.snapshot(),
        })
    }

    /// One host frame: input, layout, then the simulation step.
    pub fn frame(&mut self) -> Result<Vec<SimEvent>> {
        let frame = self.frame_count;
        self.handle_pause_window(frame);
        self.handle_input(frame)?;

        for (id, bounds) in self.layout.boxes(&self.world, self.now_ms / 1000.0) {
            self.world.update_agent_box(id, bounds)?;
        }

        let events = self.world.step(self.now_ms)?;
        for event in &events {
            if let SimEvent::ParticleEaten {
                particle_id,
                agent_id,
            } = event
            {
                tracing::debug!(frame, particle_id, agent_id, "Pellet eaten");
            }
        }

        self.frame_count += 1;
        self.now_ms += 1000.0 / self.options.fps;
        Ok(events)
    }

    fn handle_pause_window(&mut self, frame: u64) {
        if let Some(start) = self.options.pause_at {
            if frame == start + self.options.pause_frames {
                self.world.set_paused(false);
            } else if frame == start {
                self.world.set_paused(true);
            }
        }
    }

    fn handle_input(&mut self, frame: u64) -> Result<()> {
        if self.options.feed_every > 0 && frame % self.options.feed_every == 0 {
            let request = self.world.falling_request(self.options.feed_count);
            self.world.spawn_falling(&request)?;
        }
        if self.options.bubble_every > 0 && frame % self.options.bubble_every == 0 {
            let start_y = self.world.config.container.floor_y() - 20.0;
            let request = self.world.rising_request(self.options.bubble_count, start_y);
            self.world.spawn_rising(&request)?;
        }
        Ok(())
    }
}
