use std::time::Instant;

/// Frame clock - tracks delta time and total elapsed time
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    elapsed: f32,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            elapsed: 0.0,
        }
    }

    /// Get delta time since last tick in seconds and advance the clock
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.elapsed += delta;
        delta
    }

    /// Total time accumulated across ticks, in seconds
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
