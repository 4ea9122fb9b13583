//! Wave Portfolio - static portfolio host with a wave-matching easter egg
//!
//! Core modules:
//! - `sim`: Pure game logic (wave parameters, match scoring, round state)
//! - `renderer`: Drawing surface abstraction and wave rendering
//! - `hud`: Readouts and lock badge presentation
//! - `game`: Frame driver, frame clocks and cancellation
//! - `page`: Navbar, anchor, fade-in and contact form behavior
//! - `platform`: Browser bindings (canvas, sliders, DOM panels, page features)
//! - `settings` / `server`: Native static file host

pub mod game;
pub mod hud;
pub mod page;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
#[cfg(not(target_arch = "wasm32"))]
pub mod settings;
pub mod sim;

pub use game::{
    CancelToken, Controls, FixedStepClock, FrameClock, MissingElement, WaveGame,
    run_until_cancelled,
};
pub use hud::{Hud, LockStatus, Readouts};
pub use renderer::{StrokeStyle, Surface};
pub use sim::{GamePhase, GameState, MatchScore, WaveParams};

/// Game configuration constants
pub mod consts {
    /// Target frequency band (radians per pixel column)
    pub const TARGET_FREQ_MIN: f64 = 0.01;
    pub const TARGET_FREQ_SPAN: f64 = 0.03;
    /// Target amplitude band in pixels; the upper bound is exclusive
    pub const TARGET_AMP_MIN: i32 = 30;
    pub const TARGET_AMP_MAX: i32 = 90;

    /// Raw frequency slider value is divided by this to get radians per column
    pub const FREQ_SLIDER_DIVISOR: f64 = 2000.0;

    /// Frequency difference at which the frequency score reaches zero
    pub const FREQ_TOLERANCE: f64 = 0.01;
    /// Amplitude difference at which the amplitude score reaches zero
    pub const AMP_TOLERANCE: f64 = 30.0;
    pub const FREQ_WEIGHT: f64 = 0.6;
    pub const AMP_WEIGHT: f64 = 0.4;

    /// Match percentage that unlocks the secret panel
    pub const UNLOCK_THRESHOLD: u32 = 95;
    /// Delay between reaching the threshold and swapping the panels
    pub const UNLOCK_REVEAL_DELAY_MS: f64 = 500.0;

    /// Phase advance per rendered frame (radians)
    pub const PHASE_STEP: f64 = 0.15;

    /// Default listening port for the static host
    pub const DEFAULT_PORT: u16 = 3000;
}
