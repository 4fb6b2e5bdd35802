//! Step metrics for the simulation.
//!
//! Provides counters and periodic `tracing` summaries for monitoring a running
//! simulation.

use shoal_data::SimEvent;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Emit a summary line every this many steps.
const LOG_INTERVAL: u64 = 1000;

/// Counters for steps and particle removals.
pub struct Metrics {
    step_count: AtomicU64,
    falling_count: AtomicU64,
    rising_count: AtomicU64,
    eaten: AtomicU64,
    settled: AtomicU64,
    surfaced: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_count: AtomicU64::new(0),
            falling_count: AtomicU64::new(0),
            rising_count: AtomicU64::new(0),
            eaten: AtomicU64::new(0),
            settled: AtomicU64::new(0),
            surfaced: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed step with its duration and removals.
    pub fn record_step(
        &self,
        duration: Duration,
        falling: usize,
        rising: usize,
        events: &[SimEvent],
    ) {
        self.step_count.fetch_add(1, Ordering::Relaxed);
        self.falling_count.store(falling as u64, Ordering::Relaxed);
        self.rising_count.store(rising as u64, Ordering::Relaxed);

        for event in events {
            let counter = match event {
                SimEvent::ParticleEaten { .. } => &self.eaten,
                SimEvent::ParticleSettled { .. } => &self.settled,
                SimEvent::BubbleSurfaced { .. } => &self.surfaced,
            };
            counter.fetch_add(1, Ordering::Relaxed);
        }

        let step = self.step_count.load(Ordering::Relaxed);
        if step % LOG_INTERVAL == 0 {
            tracing::info!(
                step = step,
                falling = falling,
                rising = rising,
                eaten = self.eaten(),
                settled = self.settled(),
                duration_us = duration.as_micros() as u64,
                "Simulation step"
            );
        }
    }

    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn falling_count(&self) -> u64 {
        self.falling_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn rising_count(&self) -> u64 {
        self.rising_count.load(Ordering::Relaxed)
    }

    /// Pellets caught by agents so far.
    #[must_use]
    pub fn eaten(&self) -> u64 {
        self.eaten.load(Ordering::Relaxed)
    }

    /// Pellets that reached the floor so far.
    #[must_use]
    pub fn settled(&self) -> u64 {
        self.settled.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn surfaced(&self) -> u64 {
        self.surfaced.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
