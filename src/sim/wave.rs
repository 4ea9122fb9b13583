//! Sine wave parameters and sampling
//!
//! A wave is drawn left to right across the surface, one sample per pixel
//! column:
//! - y = center_y + sin(x * frequency + phase) * amplitude
//! - frequency is in radians per column, amplitude in pixels

use glam::DVec2;

use crate::consts::FREQ_SLIDER_DIVISOR;

/// Parameters of one sine wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Angular frequency (radians per pixel column)
    pub frequency: f64,
    /// Peak offset from the center line (pixels)
    pub amplitude: i32,
}

impl WaveParams {
    pub fn new(frequency: f64, amplitude: i32) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    /// Derive the player's wave from the raw slider positions.
    ///
    /// No state is carried between frames; the same slider values always
    /// give the same wave.
    pub fn from_sliders(sliders: SliderValues) -> Self {
        Self {
            frequency: sliders.frequency / FREQ_SLIDER_DIVISOR,
            amplitude: sliders.amplitude.trunc() as i32,
        }
    }

    /// Vertical position of the wave at column `x`
    #[inline]
    pub fn y_at(&self, x: f64, center_y: f64, phase: f64) -> f64 {
        center_y + (x * self.frequency + phase).sin() * self.amplitude as f64
    }

    /// Sample one point per pixel column in `[0, width)`
    pub fn sample(&self, width: u32, center_y: f64, phase: f64) -> Vec<DVec2> {
        (0..width)
            .map(|x| {
                let x = x as f64;
                DVec2::new(x, self.y_at(x, center_y, phase))
            })
            .collect()
    }
}

/// Raw positions of the two input sliders, read once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliderValues {
    /// Frequency slider (scaled down by `FREQ_SLIDER_DIVISOR`)
    pub frequency: f64,
    /// Amplitude slider (used directly as pixels)
    pub amplitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_from_sliders_scales_frequency() {
        let wave = WaveParams::from_sliders(SliderValues {
            frequency: 50.0,
            amplitude: 60.0,
        });
        assert!((wave.frequency - 0.025).abs() < 1e-12);
        assert_eq!(wave.amplitude, 60);
    }

    #[test]
    fn test_from_sliders_truncates_amplitude() {
        let wave = WaveParams::from_sliders(SliderValues {
            frequency: 20.0,
            amplitude: 45.9,
        });
        assert_eq!(wave.amplitude, 45);
    }

    #[test]
    fn test_sample_one_point_per_column() {
        let wave = WaveParams::new(0.02, 40);
        let points = wave.sample(320, 100.0, 0.0);
        assert_eq!(points.len(), 320);
        assert_eq!(points[0], DVec2::new(0.0, 100.0));
        assert_eq!(points[319].x, 319.0);
    }

    #[test]
    fn test_sample_empty_surface() {
        let wave = WaveParams::new(0.02, 40);
        assert!(wave.sample(0, 50.0, 1.0).is_empty());
    }

    #[test]
    fn test_y_at_applies_phase() {
        let wave = WaveParams::new(0.01, 30);
        // sin(pi/2) = 1 -> full amplitude below the center line
        let y = wave.y_at(0.0, 100.0, FRAC_PI_2);
        assert!((y - 130.0).abs() < 1e-9);
    }
}
