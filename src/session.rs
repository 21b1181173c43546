//! Frame driver
//!
//! One `Session::frame` per display refresh: sample held input, run one
//! tick, hand back what the presentation layer needs to know.

use serde::{Deserialize, Serialize};

use crate::hud::{HudSnapshot, HudTracker};
use crate::sim::{FrameView, GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEnd {
    pub won: bool,
    pub score: u64,
}

/// Result of one refresh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    pub events: Vec<GameEvent>,
    /// Present only when a scoreboard field changed
    pub hud: Option<HudSnapshot>,
    /// Present while the session sits in a terminal phase
    pub ended: Option<SessionEnd>,
}

/// A play session: simulation state plus its presentation-facing bookkeeping
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    hud: HudTracker,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            state: GameState::with_tuning(tuning),
            hud: HudTracker::new(),
        }
    }

    /// Advance one refresh with the actions currently held
    pub fn frame(&mut self, input: TickInput) -> FrameOutput {
        tick(&mut self.state, &input);

        FrameOutput {
            events: self.state.drain_events(),
            hud: self.hud.observe(&self.state),
            ended: self.ended(),
        }
    }

    /// Reset every entity and counter
    pub fn restart(&mut self) -> FrameOutput {
        self.state.restart();
        self.hud.invalidate();
        FrameOutput {
            events: self.state.drain_events(),
            hud: self.hud.observe(&self.state),
            ended: None,
        }
    }

    pub fn ended(&self) -> Option<SessionEnd> {
        let score = self.state.score;
        match self.state.phase {
            GamePhase::Playing => None,
            GamePhase::GameOver => Some(SessionEnd { won: false, score }),
            GamePhase::Won => Some(SessionEnd { won: true, score }),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read-only view for the renderer
    pub fn view(&self) -> FrameView<'_> {
        self.state.frame()
    }
}
