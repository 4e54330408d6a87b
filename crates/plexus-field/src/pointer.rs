//! Pointer position tracking
//!
//! The field does not react to the cursor yet; the tracker exists as the
//! collaborator seam the viewer feeds from its cursor events.

/// Tracks the most recent cursor position in surface pixels
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Option<(f64, f64)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor move event
    pub fn process_move(&mut self, x: f64, y: f64) {
        self.position = Some((x, y));
    }

    /// Latest known position, None until the first move event
    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unknown_then_tracks_latest() {
        let mut pointer = PointerTracker::new();
        assert!(pointer.position().is_none());

        pointer.process_move(10.0, 20.0);
        pointer.process_move(11.5, 19.0);
        assert_eq!(pointer.position(), Some((11.5, 19.0)));
    }
}
