//! Frame-rate gate capping accepted ticks at a fixed Hz

/// Decides whether a frame timestamp is accepted or skipped.
///
/// The host scheduler may fire at any native refresh rate; the pacer
/// accepts at most `max_fps` frames per second by skipping timestamps
/// that arrive before the minimum interval has elapsed. It never raises
/// the rate above what the host provides. Timestamps are caller-supplied
/// monotonic milliseconds so the gate is deterministic under test.
pub struct FramePacer {
    /// Minimum gap between accepted frames in milliseconds
    min_interval_ms: f64,
    /// Timestamp of the last accepted frame
    last_accepted_ms: Option<f64>,
}

impl FramePacer {
    pub fn new(max_fps: f32) -> Self {
        Self {
            min_interval_ms: 1000.0 / max_fps as f64,
            last_accepted_ms: None,
        }
    }

    /// Returns true if a frame at `now_ms` should do work.
    ///
    /// A skipped frame leaves the pacer untouched; the first call always
    /// accepts.
    pub fn accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last < self.min_interval_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_always_accepted() {
        let mut pacer = FramePacer::new(60.0);
        assert!(pacer.accept(12345.0));
    }

    #[test]
    fn gate_skips_fast_frames() {
        let mut pacer = FramePacer::new(60.0);
        assert!(pacer.accept(0.0));
        // 10ms later: under 1000/60 = 16.67ms, skipped
        assert!(!pacer.accept(10.0));
        // 16.7ms after the accepted frame: passes
        assert!(pacer.accept(16.7));
    }

    #[test]
    fn skipped_frame_does_not_move_the_window() {
        let mut pacer = FramePacer::new(60.0);
        assert!(pacer.accept(0.0));
        assert!(!pacer.accept(10.0));
        // Measured from the accepted frame at t=0, not the skipped one
        assert!(pacer.accept(17.0));
    }

    #[test]
    fn lower_cap_widens_the_interval() {
        let mut pacer = FramePacer::new(30.0);
        assert!(pacer.accept(0.0));
        assert!(!pacer.accept(20.0));
        assert!(pacer.accept(34.0));
    }
}
