//! Game state for one page view
//!
//! Nothing here is persisted; the state lives as long as the canvas does.

use rand::Rng;
use rand_pcg::Pcg32;

use super::wave::WaveParams;
use crate::consts::*;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Player is tuning the sliders
    Playing,
    /// Match threshold reached this round
    Unlocked,
}

/// Seed holder for per-round RNG streams
///
/// Each round draws from its own PCG stream so a round's target depends
/// only on the seed and the round number.
#[derive(Debug, Clone)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self, round: u64) -> Pcg32 {
        Pcg32::new(self.seed, round)
    }
}

/// Complete game state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// RNG state
    pub rng_state: RngState,
    /// Round counter, bumped by every reset
    pub round: u64,
    /// Reference wave, fixed for the whole round
    pub target: WaveParams,
    /// Shared animation phase (radians), never wrapped
    pub phase: f64,
    /// Current phase of the round
    pub game_phase: GamePhase,
}

impl GameState {
    /// Create a new game state with the given seed and roll the first target
    pub fn new(seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        let target = roll_target(&mut rng_state.to_rng(0));
        Self {
            rng_state,
            round: 0,
            target,
            phase: 0.0,
            game_phase: GamePhase::Playing,
        }
    }

    /// Start a fresh round: new target, phase zeroed, locked again
    pub fn reset(&mut self) {
        self.round += 1;
        self.target = roll_target(&mut self.rng_state.to_rng(self.round));
        self.phase = 0.0;
        self.game_phase = GamePhase::Playing;
    }

    #[inline]
    pub fn is_unlocked(&self) -> bool {
        self.game_phase == GamePhase::Unlocked
    }
}

/// Sample a target wave.
///
/// Frequency is floored to three decimals within [0.010, 0.040); amplitude
/// is a whole pixel count within [30, 90).
pub fn roll_target<R: Rng>(rng: &mut R) -> WaveParams {
    let raw: f64 = rng.random::<f64>() * TARGET_FREQ_SPAN + TARGET_FREQ_MIN;
    let frequency = (raw * 1000.0).floor() / 1000.0;
    let amplitude = rng.random_range(TARGET_AMP_MIN..TARGET_AMP_MAX);
    WaveParams::new(frequency, amplitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_target_in_range(target: &WaveParams) {
        assert!(
            (0.01..=0.04).contains(&target.frequency),
            "frequency {} out of range",
            target.frequency
        );
        assert!(
            (30..=90).contains(&target.amplitude),
            "amplitude {} out of range",
            target.amplitude
        );
    }

    #[test]
    fn test_new_state_is_playing() {
        let state = GameState::new(42);
        assert_eq!(state.round, 0);
        assert_eq!(state.phase, 0.0);
        assert_eq!(state.game_phase, GamePhase::Playing);
        assert!(!state.is_unlocked());
        assert_target_in_range(&state.target);
    }

    #[test]
    fn test_targets_stay_in_range() {
        let mut state = GameState::new(7);
        for _ in 0..500 {
            assert_target_in_range(&state.target);
            state.reset();
        }
    }

    #[test]
    fn test_target_frequency_has_three_decimals() {
        let mut state = GameState::new(1234);
        for _ in 0..50 {
            let scaled = state.target.frequency * 1000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
            state.reset();
        }
    }

    #[test]
    fn test_reset_clears_round_state() {
        let mut state = GameState::new(99);
        state.phase = 12.3;
        state.game_phase = GamePhase::Unlocked;

        state.reset();

        assert_eq!(state.round, 1);
        assert_eq!(state.phase, 0.0);
        assert_eq!(state.game_phase, GamePhase::Playing);
        assert_target_in_range(&state.target);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should roll identical targets every round
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        for _ in 0..10 {
            assert_eq!(a.target, b.target);
            a.reset();
            b.reset();
        }
    }

    #[test]
    fn test_rounds_reroll_target() {
        let mut state = GameState::new(5);
        let mut targets = vec![state.target];
        for _ in 0..20 {
            state.reset();
            targets.push(state.target);
        }
        assert!(targets.windows(2).any(|w| w[0] != w[1]));
    }
}
