//! The particle field simulator: reset, tick, pairwise links

use crate::config::FieldConfig;
use crate::pacer::FramePacer;
use crate::particle::Particle;
use crate::rand::FieldRng;
use crate::surface::Surface;

/// Outcome of one scheduler callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The frame arrived before the pacing interval elapsed; nothing was done
    Skipped,
    /// The frame was accepted and drawn; `links` lines were stroked
    Rendered { links: usize },
    /// The simulator has been stopped; no further frames will do work
    Stopped,
}

/// Link strength for a pair at squared distance `dist_sq`.
///
/// Returns the stroke weight `1 - d / link_distance` when the pair is
/// strictly inside the threshold, None otherwise. Weight approaches zero
/// at the threshold and one as the pair converges.
pub fn link_weight(dist_sq: f32, link_distance: f32) -> Option<f32> {
    if dist_sq < link_distance * link_distance {
        Some(1.0 - dist_sq.sqrt() / link_distance)
    } else {
        None
    }
}

/// Owns the particle collection and drives the update/draw cycle.
///
/// One instance per window. `reset` regenerates the field for the current
/// surface dimensions; `tick` advances and draws one frame subject to the
/// frame-rate gate; `stop` halts the loop for good.
pub struct FieldSimulator {
    config: FieldConfig,
    /// Population size, fixed by the count policy at construction.
    /// Deliberately not re-evaluated on resize (see DESIGN.md).
    count: usize,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    pacer: FramePacer,
    rng: FieldRng,
    running: bool,
}

impl FieldSimulator {
    /// Build a simulator; the count policy sees `initial_viewport_width`
    /// exactly once, here.
    pub fn new(config: FieldConfig, initial_viewport_width: f32, seed: u32) -> Self {
        let count = config.count_for_width(initial_viewport_width);
        let pacer = FramePacer::new(config.max_fps);
        Self {
            config,
            count,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            pacer,
            rng: FieldRng::new(seed),
            running: true,
        }
    }

    /// Discard the field and regenerate it for the given surface size.
    ///
    /// Called at startup and on every viewport resize; in-flight positions
    /// are not rescaled, the scene visually restarts.
    pub fn reset(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        for _ in 0..self.count {
            let particle = Particle {
                x: self.rng.range(0.0, width),
                y: self.rng.range(0.0, height),
                radius: self
                    .rng
                    .range(self.config.radius_min, self.config.radius_max),
                speed_x: self.rng.range(-self.config.max_speed, self.config.max_speed),
                speed_y: self.rng.range(-self.config.max_speed, self.config.max_speed),
            };
            self.particles.push(particle);
        }
    }

    /// Run one scheduler callback at monotonic time `now_ms`.
    ///
    /// Skipped frames reschedule without touching simulation state or the
    /// surface. An accepted frame clears, integrates, draws every dot,
    /// then strokes a faded line for every pair inside the link distance
    /// (O(n²); n is at most the desktop count).
    pub fn tick(&mut self, now_ms: f64, surface: &mut dyn Surface) -> Tick {
        if !self.running {
            return Tick::Stopped;
        }
        if !self.pacer.accept(now_ms) {
            return Tick::Skipped;
        }

        surface.clear();

        for particle in &mut self.particles {
            particle.step(self.width, self.height);
        }

        for particle in &self.particles {
            surface.fill_circle(
                particle.x,
                particle.y,
                particle.radius,
                self.config.dot_color,
            );
        }

        let mut links = 0;
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                if let Some(weight) = link_weight(a.distance_sq(b), self.config.link_distance) {
                    surface.stroke_line(
                        a.x,
                        a.y,
                        b.x,
                        b.y,
                        self.config.link_color.with_alpha_scaled(weight),
                        weight,
                    );
                    links += 1;
                }
            }
        }

        Tick::Rendered { links }
    }

    /// Halt the loop. There is no resume; a stopped simulator only ever
    /// reports `Tick::Stopped`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The population size picked by the count policy
    pub fn particle_count(&self) -> usize {
        self.count
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn simulator(viewport_width: f32, seed: u32) -> FieldSimulator {
        FieldSimulator::new(FieldConfig::default(), viewport_width, seed)
    }

    #[test]
    fn count_policy_desktop_and_mobile() {
        let mut sim = simulator(1024.0, 1);
        sim.reset(1024.0, 768.0);
        assert_eq!(sim.particles().len(), 60);

        let mut sim = simulator(500.0, 1);
        sim.reset(500.0, 800.0);
        assert_eq!(sim.particles().len(), 30);
    }

    #[test]
    fn count_is_not_reevaluated_on_resize() {
        // Constructed at a mobile width, resized past the breakpoint:
        // the population stays at the mobile count.
        let mut sim = simulator(500.0, 1);
        sim.reset(500.0, 800.0);
        sim.reset(1920.0, 1080.0);
        assert_eq!(sim.particles().len(), 30);
    }

    #[test]
    fn reset_is_idempotent_and_in_range() {
        let mut sim = simulator(1280.0, 99);
        for _ in 0..2 {
            sim.reset(1280.0, 800.0);
            assert_eq!(sim.particles().len(), 60);
            for p in sim.particles() {
                assert!(p.x >= 0.0 && p.x < 1280.0);
                assert!(p.y >= 0.0 && p.y < 800.0);
                assert!(p.radius >= 1.0 && p.radius < 3.0);
                assert!(p.speed_x >= -0.2 && p.speed_x < 0.2);
                assert!(p.speed_y >= -0.2 && p.speed_y < 0.2);
            }
        }
    }

    #[test]
    fn accepted_tick_clears_then_draws_every_dot() {
        let mut sim = simulator(1024.0, 7);
        sim.reset(1024.0, 768.0);
        let mut surface = RecordingSurface::new();

        let outcome = sim.tick(0.0, &mut surface);
        assert!(matches!(outcome, Tick::Rendered { .. }));
        assert_eq!(
            surface.commands[0],
            crate::surface::DrawCommand::Clear,
            "clear must precede all drawing"
        );
        assert_eq!(surface.circle_count(), 60);
    }

    #[test]
    fn gated_tick_does_no_work() {
        let mut sim = simulator(1024.0, 7);
        sim.reset(1024.0, 768.0);
        let mut surface = RecordingSurface::new();

        assert!(matches!(sim.tick(0.0, &mut surface), Tick::Rendered { .. }));
        let drawn = surface.commands.len();
        let positions: Vec<(f32, f32)> = sim.particles().iter().map(|p| (p.x, p.y)).collect();

        // 10ms later: under the 16.67ms interval
        assert_eq!(sim.tick(10.0, &mut surface), Tick::Skipped);
        assert_eq!(surface.commands.len(), drawn, "no drawing on a skipped frame");
        let after: Vec<(f32, f32)> = sim.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(positions, after, "no integration on a skipped frame");
    }

    #[test]
    fn stopped_simulator_does_nothing() {
        let mut sim = simulator(1024.0, 7);
        sim.reset(1024.0, 768.0);
        sim.stop();
        assert!(!sim.is_running());

        let mut surface = RecordingSurface::new();
        assert_eq!(sim.tick(1000.0, &mut surface), Tick::Stopped);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn link_weight_threshold_is_strict() {
        // Squared distance just inside 100² links; just outside does not
        assert!(link_weight(9999.0, 100.0).is_some());
        assert!(link_weight(10001.0, 100.0).is_none());
        assert!(link_weight(10000.0, 100.0).is_none());

        // Weight fades toward zero at the threshold, toward one up close
        let near = link_weight(1.0, 100.0).unwrap();
        let far = link_weight(9801.0, 100.0).unwrap(); // d = 99
        assert!(near > 0.98);
        assert!((far - 0.01).abs() < 1e-4);
    }

    #[test]
    fn pair_inside_threshold_draws_a_line() {
        let mut sim = simulator(1024.0, 7);
        sim.reset(1024.0, 768.0);
        // Pin the field to exactly two particles a known distance apart
        sim.particles.clear();
        sim.particles.push(Particle {
            x: 100.0,
            y: 100.0,
            radius: 2.0,
            speed_x: 0.0,
            speed_y: 0.0,
        });
        sim.particles.push(Particle {
            x: 150.0,
            y: 100.0,
            radius: 2.0,
            speed_x: 0.0,
            speed_y: 0.0,
        });

        let mut surface = RecordingSurface::new();
        let outcome = sim.tick(0.0, &mut surface);
        assert_eq!(outcome, Tick::Rendered { links: 1 });
        assert_eq!(surface.line_count(), 1);

        // Push them past the threshold; the link disappears
        sim.particles[1].x = 250.0;
        let outcome = sim.tick(100.0, &mut surface);
        assert_eq!(outcome, Tick::Rendered { links: 0 });
    }

    #[test]
    fn boundary_containment_over_many_ticks() {
        let mut sim = simulator(1280.0, 0xC0FFEE);
        sim.reset(1280.0, 800.0);
        assert_eq!(sim.particles().len(), 60);
        let mut surface = RecordingSurface::new();

        let v_max = sim.config().max_speed;
        for frame in 0..1000u32 {
            surface.commands.clear();
            // 17ms spacing keeps every frame above the pacing interval
            let outcome = sim.tick(frame as f64 * 17.0, &mut surface);
            let Tick::Rendered { links } = outcome else {
                panic!("expected every frame to be accepted, got {outcome:?}");
            };
            assert!(links <= 60 * 59 / 2);

            for p in sim.particles() {
                assert!(
                    p.x >= -v_max && p.x <= 1280.0 + v_max,
                    "x escaped the overshoot envelope at frame {frame}: {}",
                    p.x
                );
                assert!(
                    p.y >= -v_max && p.y <= 800.0 + v_max,
                    "y escaped the overshoot envelope at frame {frame}: {}",
                    p.y
                );
            }
        }
    }
}
