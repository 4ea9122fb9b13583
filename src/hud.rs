//! Player-facing readouts and the lock badge
//!
//! The `Hud` trait is what the frame driver talks to; the browser build
//! implements it over DOM elements.

use crate::sim::{FrameReport, WaveParams};

/// Lock badge state, which also decides which panel is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockStatus {
    /// Game controls shown, secret panel hidden
    Locked,
    /// Game controls hidden, secret panel shown
    Unlocked,
}

impl LockStatus {
    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            LockStatus::Locked => "LOCKED",
            LockStatus::Unlocked => "UNLOCKED",
        }
    }

    /// Font Awesome icon class for the badge
    pub fn icon_class(&self) -> &'static str {
        match self {
            LockStatus::Locked => "fa-lock",
            LockStatus::Unlocked => "fa-lock-open",
        }
    }

    /// CSS class applied to the badge element
    pub fn css_class(&self) -> &'static str {
        match self {
            LockStatus::Locked => "locked",
            LockStatus::Unlocked => "unlocked",
        }
    }

    /// Inner HTML for the badge
    pub fn badge_html(&self) -> String {
        format!(r#"<i class="fas {}"></i> {}"#, self.icon_class(), self.label())
    }
}

/// Text shown next to the sliders and the match meter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readouts {
    pub frequency: String,
    pub amplitude: String,
    pub match_percent: String,
}

impl Readouts {
    pub fn from_report(report: &FrameReport) -> Self {
        Self {
            frequency: format_frequency(report.user.frequency),
            amplitude: report.user.amplitude.to_string(),
            match_percent: report.score.total.to_string(),
        }
    }
}

/// Frequencies are shown with three decimals
pub fn format_frequency(frequency: f64) -> String {
    format!("{:.3}", frequency)
}

/// Output side of the game
pub trait Hud {
    /// Update the per-frame readouts
    fn show_readouts(&mut self, readouts: &Readouts);
    /// Show the target parameters as a hint
    fn show_target_hint(&mut self, target: &WaveParams);
    /// Flip the badge and swap the game/secret panels
    fn set_lock_status(&mut self, status: LockStatus);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, tick};

    #[test]
    fn test_badge_html() {
        assert_eq!(
            LockStatus::Locked.badge_html(),
            r#"<i class="fas fa-lock"></i> LOCKED"#
        );
        assert_eq!(
            LockStatus::Unlocked.badge_html(),
            r#"<i class="fas fa-lock-open"></i> UNLOCKED"#
        );
    }

    #[test]
    fn test_readouts_from_report() {
        let mut state = GameState::new(1);
        state.target = WaveParams::new(0.025, 60);
        let report = tick(&mut state, WaveParams::new(0.015, 60));

        let readouts = Readouts::from_report(&report);
        assert_eq!(readouts.frequency, "0.015");
        assert_eq!(readouts.amplitude, "60");
        assert_eq!(readouts.match_percent, "40");
    }

    #[test]
    fn test_format_frequency_rounds() {
        assert_eq!(format_frequency(0.0126), "0.013");
        assert_eq!(format_frequency(0.04), "0.040");
    }
}
