use crate::model::error::{Result, SimError};
use crate::model::kinematics::{self, KinematicContext};
use crate::model::spatial::BoxSnapshot;
use crate::model::world::World;
use shoal_data::SimEvent;
use std::time::Instant;

impl World {
    /// Advances the simulation by one host frame.
    ///
    /// `now_ms` is the host's frame timestamp. The clock turns it into a
    /// clamped delta and records it even while paused, so resuming never
    /// replays the paused interval.
    ///
    /// # Returns
    /// The particle removals resolved during this frame, in order.
    pub fn step(&mut self, now_ms: f64) -> Result<Vec<SimEvent>> {
        if self.is_stopped() {
            return Err(SimError::Stopped);
        }
        let dt = self.clock.tick(now_ms);
        self.advance(dt)
    }

    /// Applies one step of exactly `dt` seconds, bypassing the clock.
    ///
    /// For hosts running their own fixed timestep. The staged agent boxes
    /// are consumed whether or not the step runs.
    pub fn advance(&mut self, dt: f64) -> Result<Vec<SimEvent>> {
        if self.is_stopped() {
            return Err(SimError::Stopped);
        }
        let boxes: BoxSnapshot = std::mem::take(&mut self.staged_boxes).into_iter().collect();
        if self.is_paused() {
            return Ok(Vec::new());
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let started = Instant::now();
        let mut events = Vec::new();

        self.pass_kinematics(dt, &boxes, &mut events);
        self.pass_seek(dt);

        for event in &events {
            tracing::trace!(?event, "Particle removed");
        }
        self.metrics
            .record_step(started.elapsed(), self.falling.len(), self.rising.len(), &events);
        Ok(events)
    }

    fn pass_kinematics(&mut self, dt: f64, boxes: &BoxSnapshot, events: &mut Vec<SimEvent>) {
        let ctx = KinematicContext {
            container: &self.config.container,
            boxes,
        };
        kinematics::advance_falling(&mut self.falling, dt, &ctx, events);
        kinematics::advance_rising(&mut self.rising, dt, events);
    }

    /// Runs after kinematics so agents chase where pellets are now.
    fn pass_seek(&mut self, dt: f64) {
        self.seek.update(
            self.agents.values(),
            &self.falling,
            self.config.container.height,
            dt,
        );
    }
}
