//! Drawing-surface abstraction the simulator renders through

use crate::config::Color;

/// A 2D drawing target.
///
/// The simulator only issues clear/circle/line commands; what backs them
/// (a GPU frame, a test recorder) is the caller's concern. Coordinates
/// are in surface units with the origin at the top-left.
pub trait Surface {
    /// Erase the whole surface
    fn clear(&mut self);

    /// Fill a circle of `radius` centered at (`x`, `y`)
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);

    /// Stroke a line segment from (`x1`, `y1`) to (`x2`, `y2`)
    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, width: f32);
}

/// One recorded drawing command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
        width: f32,
    },
}

/// Surface that records every command it receives, for tests
#[derive(Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        });
    }
}
