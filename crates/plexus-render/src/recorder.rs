//! Frame recorder — buffers the simulator's draw commands for GPU upload

use bytemuck::{Pod, Zeroable};
use plexus_field::{Color, Surface};

/// GPU instance data for one dot — matches the WGSL `DotInstance` struct.
/// 32 bytes, 16-byte aligned (2 x vec4).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct DotInstance {
    /// xy = center in pixels, z = radius, w unused
    pub center_radius: [f32; 4],
    pub color: [f32; 4],
}

/// Vertex for the link line list — matches the WGSL `LineVertex` input.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Implements the simulation's [`Surface`] by accumulating one frame's
/// commands into instance/vertex vectors. `clear` starts the next frame;
/// the pipeline uploads and draws whatever was buffered since then.
#[derive(Default)]
pub struct FrameRecorder {
    pub dots: Vec<DotInstance>,
    pub link_vertices: Vec<LineVertex>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link_count(&self) -> usize {
        self.link_vertices.len() / 2
    }
}

impl Surface for FrameRecorder {
    fn clear(&mut self) {
        self.dots.clear();
        self.link_vertices.clear();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.dots.push(DotInstance {
            center_radius: [x, y, radius, 0.0],
            color: color.as_array(),
        });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, _width: f32) {
        // Sub-pixel stroke width is carried by the color's alpha; GPU
        // line-list primitives are fixed at one pixel wide.
        let color = color.as_array();
        self.link_vertices.push(LineVertex {
            position: [x1, y1],
            color,
        });
        self.link_vertices.push(LineVertex {
            position: [x2, y2],
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_clears() {
        let mut recorder = FrameRecorder::new();
        recorder.fill_circle(5.0, 6.0, 2.0, Color::new(1.0, 1.0, 1.0, 0.3));
        recorder.stroke_line(0.0, 0.0, 10.0, 10.0, Color::new(1.0, 1.0, 1.0, 0.1), 0.5);
        assert_eq!(recorder.dots.len(), 1);
        assert_eq!(recorder.link_count(), 1);

        recorder.clear();
        assert!(recorder.dots.is_empty());
        assert!(recorder.link_vertices.is_empty());
    }

    #[test]
    fn instance_layout() {
        assert_eq!(std::mem::size_of::<DotInstance>(), 32);
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
    }
}
