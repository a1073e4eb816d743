/// Turns host frame timestamps into per-frame elapsed time.
///
/// Timestamps are in milliseconds. The first frame, and any frame that
/// follows a gap longer than `max_gap` (tab backgrounded, resume), yields
/// zero elapsed time so the field never jumps.
pub struct FrameClock {
    /// Longest gap still treated as real elapsed time.
    max_gap: f32,
    /// Timestamp of the previous frame.
    last: Option<f64>,
}

impl FrameClock {
    pub fn new(max_gap: f32) -> Self {
        Self {
            max_gap,
            last: None,
        }
    }

    /// Record a frame timestamp. Returns the elapsed milliseconds to simulate.
    pub fn tick(&mut self, timestamp: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (timestamp - last) as f32,
            None => 0.0,
        };
        self.last = Some(timestamp);
        if dt > self.max_gap || dt < 0.0 {
            0.0
        } else {
            dt
        }
    }
}
