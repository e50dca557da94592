/// Variable-rate frame clock.
/// Turns display-refresh timestamps (milliseconds) into elapsed seconds.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp of the previous tick, if any.
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick. The first tick returns 0.
    /// A timestamp earlier than the previous one also yields 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(self.last_ms.map_or(now_ms, |last| last.max(now_ms)));
        dt as f32
    }
}
