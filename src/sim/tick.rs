//! Per-frame game step
//!
//! Scores the player's wave, drives the unlock transition and advances the
//! shared phase. Rendering happens outside; this is pure state.

use super::score::MatchScore;
use super::state::{GamePhase, GameState};
use super::wave::WaveParams;
use crate::consts::PHASE_STEP;

/// Events emitted by a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Threshold reached for the first time this round
    Unlocked { round: u64 },
}

/// What a single frame produced
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Player's wave as derived this frame
    pub user: WaveParams,
    /// Phase the frame was drawn with (before the advance)
    pub phase: f64,
    pub score: MatchScore,
    pub events: Vec<GameEvent>,
}

/// Advance the game state by one rendered frame
pub fn tick(state: &mut GameState, user: WaveParams) -> FrameReport {
    let phase = state.phase;
    let score = MatchScore::between(&state.target, &user);

    let mut events = Vec::new();
    if score.unlocks() && state.game_phase == GamePhase::Playing {
        state.game_phase = GamePhase::Unlocked;
        events.push(GameEvent::Unlocked { round: state.round });
    }

    state.phase += PHASE_STEP;

    FrameReport {
        user,
        phase,
        score,
        events,
    }
}
