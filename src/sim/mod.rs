//! Deterministic game logic
//!
//! All wave-matching rules live here. This module must stay pure:
//! - Seeded RNG only
//! - No rendering, DOM or clock dependencies

pub mod score;
pub mod state;
pub mod tick;
pub mod wave;

pub use score::MatchScore;
pub use state::{GamePhase, GameState, RngState, roll_target};
pub use tick::{FrameReport, GameEvent, tick};
pub use wave::{SliderValues, WaveParams};
