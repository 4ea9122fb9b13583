//! Match scoring between the target wave and the player's wave
//!
//! Frequency closeness is weighted 60%, amplitude closeness 40%. Each part
//! falls off linearly and bottoms out at zero once the difference reaches
//! its tolerance.

use super::wave::WaveParams;
use crate::consts::*;

/// Similarity of two waves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore {
    /// Frequency closeness in [0, 1]
    pub frequency: f64,
    /// Amplitude closeness in [0, 1]
    pub amplitude: f64,
    /// Weighted total as a whole percentage in [0, 100]
    pub total: u32,
}

impl MatchScore {
    /// Score the player's wave against the target
    pub fn between(target: &WaveParams, user: &WaveParams) -> Self {
        let freq_diff = (user.frequency - target.frequency).abs();
        let amp_diff = (user.amplitude - target.amplitude).abs() as f64;

        let frequency = (1.0 - freq_diff / FREQ_TOLERANCE).max(0.0);
        let amplitude = (1.0 - amp_diff / AMP_TOLERANCE).max(0.0);

        let weighted = ((frequency * FREQ_WEIGHT + amplitude * AMP_WEIGHT) * 100.0).floor();
        let total = weighted.clamp(0.0, 100.0) as u32;

        Self {
            frequency,
            amplitude,
            total,
        }
    }

    /// Whether this score is high enough to unlock the secret panel
    #[inline]
    pub fn unlocks(&self) -> bool {
        self.total >= UNLOCK_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_match_scores_100() {
        let target = WaveParams::new(0.025, 60);
        let score = MatchScore::between(&target, &target);
        assert_eq!(score.frequency, 1.0);
        assert_eq!(score.amplitude, 1.0);
        assert_eq!(score.total, 100);
        assert!(score.unlocks());
    }

    #[test]
    fn test_frequency_off_by_tolerance_scores_40() {
        let target = WaveParams::new(0.025, 60);
        let user = WaveParams::new(0.015, 60);
        let score = MatchScore::between(&target, &user);
        assert_eq!(score.frequency, 0.0);
        assert_eq!(score.amplitude, 1.0);
        assert_eq!(score.total, 40);
        assert!(!score.unlocks());
    }

    #[test]
    fn test_amplitude_off_by_tolerance_scores_60() {
        let target = WaveParams::new(0.02, 30);
        let user = WaveParams::new(0.02, 60);
        let score = MatchScore::between(&target, &user);
        assert_eq!(score.amplitude, 0.0);
        assert_eq!(score.total, 60);
    }

    #[test]
    fn test_near_match_crosses_threshold() {
        // One pixel of amplitude costs 0.4 * 100 / 30 ~= 1.3 points
        let target = WaveParams::new(0.03, 50);
        let user = WaveParams::new(0.03, 51);
        let score = MatchScore::between(&target, &user);
        assert_eq!(score.total, 98);
        assert!(score.unlocks());
    }

    #[test]
    fn test_far_off_scores_zero() {
        let target = WaveParams::new(0.01, 30);
        let user = WaveParams::new(0.5, 200);
        assert_eq!(MatchScore::between(&target, &user).total, 0);
    }

    #[test]
    fn test_nan_frequency_counts_as_miss() {
        // An empty slider reads as NaN; f64::max drops it to zero
        let target = WaveParams::new(0.02, 40);
        let user = WaveParams::new(f64::NAN, 40);
        let score = MatchScore::between(&target, &user);
        assert_eq!(score.frequency, 0.0);
        assert_eq!(score.total, 40);
        assert!(!score.unlocks());
    }

    proptest! {
        #[test]
        fn total_stays_in_range(
            tf in 0.01f64..=0.04,
            ta in 30i32..=90,
            uf in 0.0f64..=0.1,
            ua in 0i32..=200,
        ) {
            let score = MatchScore::between(&WaveParams::new(tf, ta), &WaveParams::new(uf, ua));
            prop_assert!(score.total <= 100);
            prop_assert!((0.0..=1.0).contains(&score.frequency));
            prop_assert!((0.0..=1.0).contains(&score.amplitude));
        }

        #[test]
        fn identical_waves_score_100(tf in 0.01f64..=0.04, ta in 30i32..=90) {
            let wave = WaveParams::new(tf, ta);
            prop_assert_eq!(MatchScore::between(&wave, &wave).total, 100);
        }

        #[test]
        fn frequency_beyond_tolerance_contributes_nothing(
            tf in 0.01f64..=0.04,
            ta in 30i32..=90,
            offset in 0.0101f64..=0.05,
            ua in 0i32..=200,
        ) {
            let score = MatchScore::between(
                &WaveParams::new(tf, ta),
                &WaveParams::new(tf + offset, ua),
            );
            prop_assert_eq!(score.frequency, 0.0);
            prop_assert!(score.total <= 40);
        }
    }
}
