/// One-shot, re-armable dismissal timer for the click overlay.
///
/// Each `trigger` replaces any pending deadline, so the overlay hides
/// `duration_ms` after the most recent qualifying click.
#[derive(Debug, Clone)]
pub struct OverlayTimer {
    duration_ms: f64,
    deadline: Option<f64>,
    /// Pickable index of the body that raised the overlay.
    body: Option<usize>,
}

impl OverlayTimer {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            deadline: None,
            body: None,
        }
    }

    /// Show (or keep showing) the overlay and restart the countdown.
    pub fn trigger(&mut self, now_ms: f64, body: usize) {
        if self.deadline.is_some() {
            log::debug!("overlay re-armed at {} ms", now_ms);
        }
        self.deadline = Some(now_ms + self.duration_ms);
        self.body = Some(body);
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                self.body = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn body(&self) -> Option<usize> {
        self.body
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_after_duration() {
        let mut timer = OverlayTimer::new(5000.0);
        timer.trigger(0.0, 3);
        assert!(timer.is_visible());
        assert_eq!(timer.body(), Some(3));
        assert!(!timer.poll(4999.0));
        assert!(timer.poll(5000.0));
        assert!(!timer.is_visible());
        assert!(!timer.poll(6000.0), "hide fires only once");
    }

    #[test]
    fn retrigger_resets_the_window() {
        let mut timer = OverlayTimer::new(5000.0);
        timer.trigger(0.0, 3);
        assert!(!timer.poll(3000.0));
        timer.trigger(3000.0, 3);

        assert!(!timer.poll(5000.0), "first deadline must be cancelled");
        assert!(timer.is_visible());
        assert!(!timer.poll(7999.0));
        assert!(timer.poll(8000.0));
        assert!(!timer.is_visible());
    }

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = OverlayTimer::new(5000.0);
        assert!(!timer.poll(1e9));
        assert_eq!(timer.deadline(), None);
    }
}
