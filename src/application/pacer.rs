/// Caps the loop at a fixed frame rate by sleeping off unused frame time
pub struct FramePacer {
    frame_budget: f64,
    frame_start: f64,
}

impl FramePacer {
    pub fn new(target_fps: u32, now: f64) -> Self {
        Self {
            frame_budget: 1.0 / target_fps.max(1) as f64,
            frame_start: now,
        }
    }

    /// Seconds left in the current frame at time `now`
    pub fn remaining(&self, now: f64) -> f64 {
        (self.frame_budget - (now - self.frame_start)).max(0.0)
    }

    /// Block until the frame budget is spent, then start the next frame.
    /// Native only: on wasm the browser paces `next_frame` and sleeping
    /// would stall the event loop.
    pub fn wait(&mut self, now: f64) {
        let remaining = self.remaining(now);
        #[cfg(not(target_arch = "wasm32"))]
        if remaining > 0.0 {
            std::thread::sleep(std::time::Duration::from_secs_f64(remaining));
        }
        self.frame_start = now + remaining;
    }
}
