//! Stroke styles and wave path generation

use super::Surface;
use crate::sim::WaveParams;

/// How a path is stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// CSS color string
    pub color: &'static str,
    pub line_width: f64,
    /// Global alpha while stroking (0-1)
    pub alpha: f64,
    /// Shadow blur radius for a glow (0 = none)
    pub glow: f64,
}

/// Reference wave: green, translucent
pub const TARGET_STYLE: StrokeStyle = StrokeStyle {
    color: "#2ecc71",
    line_width: 4.0,
    alpha: 0.6,
    glow: 0.0,
};

/// Player wave: cyan, opaque, glowing
pub const USER_STYLE: StrokeStyle = StrokeStyle {
    color: "#00f2ff",
    line_width: 3.0,
    alpha: 1.0,
    glow: 10.0,
};

/// Draw the target wave, then the player's wave on top
pub fn render_waves<S: Surface + ?Sized>(
    surface: &mut S,
    target: &WaveParams,
    user: &WaveParams,
    phase: f64,
) {
    let (width, height) = surface.size();
    let center_y = height as f64 / 2.0;

    let target_path = target.sample(width, center_y, phase);
    surface.stroke_path(&target_path, &TARGET_STYLE);

    let user_path = user.sample(width, center_y, phase);
    surface.stroke_path(&user_path, &USER_STYLE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[derive(Default)]
    struct RecordingSurface {
        size: (u32, u32),
        strokes: Vec<(Vec<DVec2>, StrokeStyle)>,
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (u32, u32) {
            self.size
        }
        fn container_size(&self) -> (u32, u32) {
            self.size
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.size = (width, height);
        }
        fn clear(&mut self) {
            self.strokes.clear();
        }
        fn stroke_path(&mut self, points: &[DVec2], style: &StrokeStyle) {
            self.strokes.push((points.to_vec(), *style));
        }
    }

    #[test]
    fn test_render_waves_draws_target_then_user() {
        let mut surface = RecordingSurface {
            size: (200, 120),
            ..Default::default()
        };
        let target = WaveParams::new(0.02, 40);
        let user = WaveParams::new(0.03, 60);

        render_waves(&mut surface, &target, &user, 0.0);

        assert_eq!(surface.strokes.len(), 2);
        assert_eq!(surface.strokes[0].1, TARGET_STYLE);
        assert_eq!(surface.strokes[1].1, USER_STYLE);
        assert_eq!(surface.strokes[0].0.len(), 200);
        // Both waves start on the center line at phase 0
        assert_eq!(surface.strokes[0].0[0].y, 60.0);
        assert_eq!(surface.strokes[1].0[0].y, 60.0);
    }

    #[test]
    fn test_user_wave_glows_and_target_does_not() {
        assert!(USER_STYLE.glow > 0.0);
        assert_eq!(TARGET_STYLE.glow, 0.0);
        assert!(TARGET_STYLE.alpha < USER_STYLE.alpha);
    }
}
