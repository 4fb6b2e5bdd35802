//! Frame clock turning host timestamps into a clamped step delta.

/// Tracks the last host timestamp (milliseconds) and derives `dt` in seconds.
///
/// The clamp keeps one long frame (a backgrounded tab, a stalled render)
/// from moving pellets through an agent box in a single step.
#[derive(Debug, Clone)]
pub struct Clock {
    last: Option<f64>,
    max_dt: f64,
}

impl Clock {
    pub fn new(max_dt: f64) -> Self {
        Self { last: None, max_dt }
    }

    /// Records `now_ms` and returns the step delta in seconds.
    ///
    /// The first call returns 0. A timestamp earlier than the previous one
    /// yields 0 rather than a negative delta. `last` is updated either way.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            tracing::warn!(now_ms, "Ignoring non-finite frame timestamp");
            return 0.0;
        }

        let dt = match self.last {
            None => 0.0,
            Some(last) if now_ms < last => {
                tracing::warn!(now_ms, last, "Frame timestamp went backwards; dt clamped to 0");
                0.0
            }
            Some(last) => ((now_ms - last) / 1000.0).min(self.max_dt),
        };
        self.last = Some(now_ms);
        dt
    }

    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.last
    }

    #[must_use]
    pub fn max_dt(&self) -> f64 {
        self.max_dt
    }
}
