//! Canvas 2D drawing surface (wasm32 only)

use std::f64::consts::TAU;

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::surface::DrawSurface;
use crate::error::SetupError;

/// A `<canvas>` element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up the canvas by id and acquire its 2D context
    pub fn find(document: &Document, id: &str) -> Result<Self, SetupError> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| SetupError::MissingElement(id.to_string()))?
            .dyn_into()
            .map_err(|_| SetupError::WrongElementType {
                id: id.to_string(),
                expected: "canvas",
            })?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SetupError::Js(format!("{e:?}")))?
            .ok_or(SetupError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SetupError::NoContext)?;

        Ok(Self { canvas, ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn measure(&mut self) -> (f64, f64) {
        // Backing store follows the laid-out box, 1:1 with CSS pixels
        let width = self.canvas.offset_width().max(0) as u32;
        let height = self.canvas.offset_height().max(0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        (width as f64, height as f64)
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: &str, line_width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }
}
