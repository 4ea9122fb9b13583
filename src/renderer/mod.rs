//! 2D wave rendering
//!
//! Drawing goes through the `Surface` trait so the frame driver can run
//! against a real canvas in the browser and a recording surface in tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use shapes::{StrokeStyle, TARGET_STYLE, USER_STYLE, render_waves};

use glam::DVec2;

/// A 2D drawing surface sized to its container
pub trait Surface {
    /// Current drawing buffer size (width, height)
    fn size(&self) -> (u32, u32);
    /// Size of the element the surface should fill
    fn container_size(&self) -> (u32, u32);
    /// Resize the drawing buffer
    fn resize(&mut self, width: u32, height: u32);
    /// Clear the whole surface
    fn clear(&mut self);
    /// Stroke a connected polyline through `points`
    fn stroke_path(&mut self, points: &[DVec2], style: &StrokeStyle);

    /// Match the drawing buffer to the container; returns true if it changed
    fn fit_to_container(&mut self) -> bool {
        let container = self.container_size();
        if container != self.size() {
            self.resize(container.0, container.1);
            true
        } else {
            false
        }
    }
}
