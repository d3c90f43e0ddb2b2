//! Drawing surface abstraction
//!
//! The frame renderer only needs four operations, so the canvas and the
//! headless recorder share one small trait.

use glam::DVec2;

/// A 2D raster the backdrop can draw onto
pub trait DrawSurface {
    /// Read the rendered box, size the backing store to match, return it
    fn measure(&mut self) -> (f64, f64);

    /// Clear the rectangle (0, 0) - (width, height)
    fn clear(&mut self, width: f64, height: f64);

    /// Filled circle in a CSS color
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str);

    /// Straight stroked line in a CSS color
    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: &str, line_width: f64);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Circle { center: DVec2, radius: f64, color: String },
    Line { from: DVec2, to: DVec2, color: String, line_width: f64 },
}

/// In-memory surface that records draw calls instead of rasterizing
///
/// Used by the headless runner and tests. `set_size` plays the role of
/// the host layout changing the element's box.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    /// Calls since the last clear
    commands: Vec<DrawCommand>,
    frames_cleared: u64,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Change the box reported by the next `measure`
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Commands since the most recent clear (the current frame)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many times the surface has been cleared
    pub fn frames(&self) -> u64 {
        self.frames_cleared
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

impl DrawSurface for RecordingSurface {
    fn measure(&mut self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
        self.frames_cleared += 1;
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: &str, line_width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: color.to_string(),
            line_width,
        });
    }
}
