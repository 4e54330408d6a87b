//! Particle state and per-axis integrate-and-reflect stepping

/// One drifting dot in the field
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Fill radius, fixed at creation
    pub radius: f32,
    pub speed_x: f32,
    pub speed_y: f32,
}

impl Particle {
    /// Advance one frame and reflect off the `[0, width] x [0, height]` bounds.
    ///
    /// Reflection inverts the velocity sign but does not correct the
    /// position, so a particle may sit outside the bounds by at most one
    /// frame's travel; the reversed velocity pulls it back next step.
    pub fn step(&mut self, width: f32, height: f32) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.x < 0.0 || self.x > width {
            self.speed_x = -self.speed_x;
        }
        if self.y < 0.0 || self.y > height {
            self.speed_y = -self.speed_y;
        }
    }

    /// Squared Euclidean distance to another particle
    pub fn distance_sq(&self, other: &Particle) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_integrates_velocity() {
        let mut p = Particle {
            x: 10.0,
            y: 20.0,
            radius: 2.0,
            speed_x: 0.1,
            speed_y: -0.2,
        };
        p.step(100.0, 100.0);
        assert!((p.x - 10.1).abs() < 1e-6);
        assert!((p.y - 19.8).abs() < 1e-6);
        assert!((p.speed_x - 0.1).abs() < 1e-6);
    }

    #[test]
    fn step_reflects_at_right_edge_without_clamping() {
        let mut p = Particle {
            x: 99.9,
            y: 50.0,
            radius: 1.0,
            speed_x: 0.2,
            speed_y: 0.0,
        };
        p.step(100.0, 100.0);
        // Overshoots this frame, velocity flips
        assert!(p.x > 100.0);
        assert!(p.speed_x < 0.0);
        // Next step moves back toward the interior
        p.step(100.0, 100.0);
        assert!(p.x <= 100.0);
    }

    #[test]
    fn step_reflects_at_top_edge() {
        let mut p = Particle {
            x: 50.0,
            y: 0.1,
            radius: 1.0,
            speed_x: 0.0,
            speed_y: -0.2,
        };
        p.step(100.0, 100.0);
        assert!(p.y < 0.0);
        assert!(p.speed_y > 0.0);
        p.step(100.0, 100.0);
        assert!(p.y >= 0.0);
    }

    #[test]
    fn distance_sq_matches_hand_computation() {
        let a = Particle {
            x: 0.0,
            y: 0.0,
            radius: 1.0,
            speed_x: 0.0,
            speed_y: 0.0,
        };
        let b = Particle {
            x: 3.0,
            y: 4.0,
            radius: 1.0,
            speed_x: 0.0,
            speed_y: 0.0,
        };
        assert!((a.distance_sq(&b) - 25.0).abs() < 1e-6);
    }
}
