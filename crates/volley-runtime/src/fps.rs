//! Achieved frame rate measurement

/// Counts update+render steps and snapshots the count once per second.
///
/// `record_step()` is called once per completed step; `advance(dt)` feeds
/// real elapsed time. At each one-second boundary the step count becomes
/// the reported FPS and the counter resets.
#[derive(Debug, Default)]
pub struct FpsCounter {
    steps: u32,
    fps: u32,
    elapsed: f64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed update+render step
    pub fn record_step(&mut self) {
        self.steps += 1;
    }

    /// Feed elapsed wall-clock time in seconds
    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
        while self.elapsed >= 1.0 {
            self.elapsed -= 1.0;
            self.fps = self.steps;
            self.steps = 0;
        }
    }

    /// The frame rate measured over the most recent full second
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
