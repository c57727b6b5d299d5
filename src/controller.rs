use std::time::Duration;

use tracing::{info, warn};

use crate::config::GameConfig;
use crate::game::{GameState, Phase, Snapshot, TickOutcome};
use crate::input::{Direction, GameInput};
use crate::score::ScoreStore;
use crate::ticker::Ticker;

/// Receives a snapshot after every state change worth drawing.
pub trait RenderTarget {
    fn present(&mut self, snapshot: &Snapshot);
}

/// Render target that keeps only the most recent snapshot.
///
/// The terminal loop redraws from it every frame.
#[derive(Debug, Clone, Default)]
pub struct LatestSnapshot {
    latest: Option<Snapshot>,
    presented: u64,
}

impl LatestSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }

    /// Number of snapshots presented so far.
    #[must_use]
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl RenderTarget for LatestSnapshot {
    fn present(&mut self, snapshot: &Snapshot) {
        self.latest = Some(snapshot.clone());
        self.presented += 1;
    }
}

/// Owns one game and drives its lifecycle.
///
/// All methods are total: invalid transitions are no-ops and persistence
/// failures are logged, never returned.
#[derive(Debug)]
pub struct GameController<T, S, V> {
    state: GameState,
    ticker: T,
    scores: S,
    view: V,
    tick_interval: Duration,
}

impl<T, S, V> GameController<T, S, V>
where
    T: Ticker,
    S: ScoreStore,
    V: RenderTarget,
{
    /// Loads the stored high score, builds a fresh idle game and presents it.
    pub fn new(config: &GameConfig, ticker: T, mut scores: S, view: V) -> Self {
        let high_score = scores.load().unwrap_or_else(|error| {
            warn!(%error, "could not load high score; starting from 0");
            0
        });

        let state = match config.seed {
            Some(seed) => GameState::new_with_seed(config.grid, high_score, seed),
            None => GameState::new(config.grid, high_score),
        };

        let mut controller = Self {
            state,
            ticker,
            scores,
            view,
            tick_interval: config.tick_interval,
        };
        controller.present();
        controller
    }

    /// Idle/Paused → Running and arms the ticker; Running → Paused.
    /// Does nothing after game over.
    pub fn start(&mut self) {
        match self.state.phase {
            Phase::Idle | Phase::Paused => {}
            Phase::Running => {
                self.pause();
                return;
            }
            Phase::GameOver => return,
        }

        self.state.phase = Phase::Running;
        self.arm_ticker();
        info!(score = self.state.score, "game running");
        self.present();
    }

    /// Running → Paused. Disarms the ticker and leaves the game untouched.
    pub fn pause(&mut self) {
        if self.state.phase != Phase::Running {
            return;
        }

        self.ticker.cancel();
        self.state.phase = Phase::Paused;
        info!(score = self.state.score, "game paused");
        self.present();
    }

    /// The start/pause trigger exposed to input sources.
    pub fn toggle_running(&mut self) {
        self.start();
    }

    /// Discards the current game for a fresh idle one, keeping the high score.
    pub fn reset(&mut self) {
        self.ticker.cancel();
        self.state.reset();
        info!(high_score = self.state.high_score, "game reset");
        self.present();
    }

    /// Buffers a turn for the next tick; reversals are dropped.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.state.set_pending_direction(direction);
    }

    /// Routes one input event. `Quit` is left to the caller.
    pub fn handle_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.set_pending_direction(direction),
            GameInput::ToggleRunning => self.toggle_running(),
            GameInput::Reset => self.reset(),
            GameInput::Quit => {}
        }
    }

    /// Runs one simulation step. Called by the owner of the ticker each time
    /// it fires; ticks arriving while not running are ignored.
    pub fn on_tick(&mut self) -> TickOutcome {
        if self.state.phase != Phase::Running {
            return TickOutcome::Ignored;
        }

        let previous_high_score = self.state.high_score;
        let outcome = self.state.advance();

        if self.state.high_score > previous_high_score {
            self.persist_high_score();
        }

        if let TickOutcome::Ended(reason) = outcome {
            self.ticker.cancel();
            info!(
                ?reason,
                score = self.state.score,
                ticks = self.state.tick_count(),
                "game over"
            );
        }

        self.present();
        outcome
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for scripted scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    #[must_use]
    pub fn scores(&self) -> &S {
        &self.scores
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    fn arm_ticker(&mut self) {
        // Never leave a second schedule running alongside the new one.
        self.ticker.cancel();
        self.ticker.start(self.tick_interval);
    }

    fn persist_high_score(&mut self) {
        if let Err(error) = self.scores.save(self.state.high_score) {
            warn!(%error, high_score = self.state.high_score, "failed to save high score");
        }
    }

    fn present(&mut self) {
        let snapshot = self.state.snapshot();
        self.view.present(&snapshot);
    }
}
