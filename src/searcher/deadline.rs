use std::time::{Duration, Instant};

/// A wall-clock budget that starts when the search does.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn start(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// A zero budget is expired from the start.
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.budget
    }
}
