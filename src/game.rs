//! Frame driver for the wave-matching game
//!
//! `WaveGame::frame` runs one full frame: fit the surface, draw both waves,
//! score, update the readouts and handle the unlock. The caller decides when
//! frames happen, either `requestAnimationFrame` in the browser or a
//! `FrameClock` driven by `run_until_cancelled`.
//!
//! The panel swap after an unlock is deferred by `UNLOCK_REVEAL_DELAY_MS`
//! and tagged with the round it belongs to. A reset drops it, and a reveal
//! for any other round is discarded.

use std::cell::Cell;
use std::rc::Rc;

use crate::consts::UNLOCK_REVEAL_DELAY_MS;
use crate::hud::{Hud, LockStatus, Readouts};
use crate::renderer::{Surface, render_waves};
use crate::sim::{FrameReport, GameEvent, GameState, SliderValues, WaveParams, tick};

/// Input side of the game, read synchronously once per frame
pub trait Controls {
    fn read(&self) -> SliderValues;
}

/// Source of frame timestamps (milliseconds)
pub trait FrameClock {
    /// Timestamp of the next frame, or `None` when no more frames will come
    fn next_frame(&mut self) -> Option<f64>;
}

/// Clock that ticks at a fixed interval, optionally for a fixed frame count
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    now_ms: f64,
    step_ms: f64,
    remaining: Option<u64>,
}

impl FixedStepClock {
    /// Unbounded clock; only a cancel stops a loop driven by it
    pub fn new(step_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            step_ms,
            remaining: None,
        }
    }

    /// Clock that yields exactly `frames` timestamps
    pub fn with_limit(step_ms: f64, frames: u64) -> Self {
        Self {
            remaining: Some(frames),
            ..Self::new(step_ms)
        }
    }

    pub fn now(&self) -> f64 {
        self.now_ms
    }
}

impl FrameClock for FixedStepClock {
    fn next_frame(&mut self) -> Option<f64> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        self.now_ms += self.step_ms;
        Some(self.now_ms)
    }
}

/// Shared stop flag for a frame loop (single-threaded)
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Panel swap waiting for its delay to elapse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingReveal {
    /// Round that reached the threshold
    pub round: u64,
    /// Frame time at or after which the swap applies
    pub due_at_ms: f64,
}

/// Page element the game needs but could not find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingElement {
    Canvas,
    Context2d,
    Sliders,
}

impl MissingElement {
    pub fn as_str(self) -> &'static str {
        match self {
            MissingElement::Canvas => "wave canvas",
            MissingElement::Context2d => "canvas 2D context",
            MissingElement::Sliders => "wave sliders",
        }
    }
}

/// Game instance holding all state and its collaborators
pub struct WaveGame<S, C, H> {
    state: GameState,
    surface: S,
    controls: C,
    hud: H,
    pending_reveal: Option<PendingReveal>,
}

impl<S: Surface, C: Controls, H: Hud> WaveGame<S, C, H> {
    pub fn new(seed: u64, surface: S, controls: C, mut hud: H) -> Self {
        let state = GameState::new(seed);
        hud.show_target_hint(&state.target);
        hud.set_lock_status(LockStatus::Locked);
        log::debug!(
            "Round {} target: freq {:.3}, amp {}",
            state.round,
            state.target.frequency,
            state.target.amplitude
        );

        Self {
            state,
            surface,
            controls,
            hud,
            pending_reveal: None,
        }
    }

    /// Build a game from looked-up page parts.
    ///
    /// Fails with the first missing part; the HUD is left untouched then, so
    /// a page without the game shows nothing of it.
    pub fn mount(
        seed: u64,
        surface: Result<S, MissingElement>,
        controls: Result<C, MissingElement>,
        hud: H,
    ) -> Result<Self, MissingElement> {
        let surface = surface?;
        let controls = controls?;
        Ok(Self::new(seed, surface, controls, hud))
    }

    /// Render and score one frame at time `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        self.fire_due_reveal(now_ms);

        self.surface.fit_to_container();
        self.surface.clear();

        let user = WaveParams::from_sliders(self.controls.read());
        render_waves(&mut self.surface, &self.state.target, &user, self.state.phase);

        let report = tick(&mut self.state, user);
        self.hud.show_readouts(&Readouts::from_report(&report));

        for event in &report.events {
            match *event {
                GameEvent::Unlocked { round } => {
                    log::info!("Wave matched ({}%), unlocking round {}", report.score.total, round);
                    self.pending_reveal = Some(PendingReveal {
                        round,
                        due_at_ms: now_ms + UNLOCK_REVEAL_DELAY_MS,
                    });
                }
            }
        }

        report
    }

    /// Start a new round and put the panels back
    pub fn reset(&mut self) {
        if let Some(pending) = self.pending_reveal.take() {
            log::debug!("Cancelled pending reveal for round {}", pending.round);
        }

        self.state.reset();
        self.hud.show_target_hint(&self.state.target);
        self.hud.set_lock_status(LockStatus::Locked);

        log::info!("Round {} started", self.state.round);
        log::debug!(
            "Round {} target: freq {:.3}, amp {}",
            self.state.round,
            self.state.target.frequency,
            self.state.target.amplitude
        );
    }

    fn fire_due_reveal(&mut self, now_ms: f64) {
        let Some(pending) = self.pending_reveal else {
            return;
        };
        if now_ms < pending.due_at_ms {
            return;
        }
        self.pending_reveal = None;

        if pending.round == self.state.round && self.state.is_unlocked() {
            self.hud.set_lock_status(LockStatus::Unlocked);
            log::info!("Secret panel revealed");
        } else {
            log::debug!("Dropped stale reveal for round {}", pending.round);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pending_reveal(&self) -> Option<&PendingReveal> {
        self.pending_reveal.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn controls_mut(&mut self) -> &mut C {
        &mut self.controls
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }
}

/// Drive `game` from `clock` until the clock runs dry or `cancel` fires.
///
/// Returns the number of frames rendered.
pub fn run_until_cancelled<S, C, H, K>(
    game: &mut WaveGame<S, C, H>,
    clock: &mut K,
    cancel: &CancelToken,
) -> u64
where
    S: Surface,
    C: Controls,
    H: Hud,
    K: FrameClock + ?Sized,
{
    let mut frames = 0;
    while !cancel.is_cancelled() {
        let Some(now) = clock.next_frame() else {
            break;
        };
        game.frame(now);
        frames += 1;
    }
    frames
}
