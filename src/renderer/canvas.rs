//! Canvas 2D backed surface

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use super::{StrokeStyle, Surface};

/// `Surface` over an HTML canvas, sized to its parent element
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas; `None` if it has no 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn container_size(&self) -> (u32, u32) {
        match self
            .canvas
            .parent_element()
            .and_then(|p| p.dyn_into::<HtmlElement>().ok())
        {
            Some(parent) => (
                parent.offset_width().max(0) as u32,
                parent.offset_height().max(0) as u32,
            ),
            // Detached canvas keeps whatever size it has
            None => self.size(),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        log::debug!("Canvas resized to {}x{}", width, height);
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn stroke_path(&mut self, points: &[DVec2], style: &StrokeStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.set_stroke_style_str(style.color);
        ctx.set_line_width(style.line_width);
        ctx.set_global_alpha(style.alpha);
        ctx.set_shadow_blur(style.glow);
        if style.glow > 0.0 {
            ctx.set_shadow_color(style.color);
        }

        ctx.move_to(first.x, first.y);
        for p in rest {
            ctx.line_to(p.x, p.y);
        }
        ctx.stroke();

        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
    }
}
