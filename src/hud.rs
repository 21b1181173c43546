//! Scoreboard snapshots
//!
//! The HUD never reads `GameState` directly; it gets a `HudSnapshot` whenever
//! one of its fields changed since the last one it saw.

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, PowerTier};

/// Everything the scoreboard shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub coins: u32,
    pub lives: u32,
    pub power_status: String,
}

impl HudSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            score: state.score,
            coins: state.coins_collected,
            lives: state.lives,
            power_status: power_status(state),
        }
    }
}

/// Active power conditions, e.g. "🔥 Fire Power! ⭐ Star Power!"
pub fn power_status(state: &GameState) -> String {
    let player = &state.player;
    let mut parts = Vec::new();
    if player.tier == PowerTier::FireCapable {
        parts.push("🔥 Fire Power!");
    }
    if player.has_star() {
        parts.push("⭐ Star Power!");
    }
    if player.timers.transforming > 0 {
        parts.push("✨ Transforming...");
    }
    parts.join(" ")
}

/// Emits a snapshot only when it differs from the last one emitted
#[derive(Debug, Clone, Default)]
pub struct HudTracker {
    last: Option<HudSnapshot>,
}

impl HudTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, state: &GameState) -> Option<HudSnapshot> {
        let snapshot = HudSnapshot::capture(state);
        if self.last.as_ref() == Some(&snapshot) {
            return None;
        }
        self.last = Some(snapshot.clone());
        Some(snapshot)
    }

    /// Forget the last snapshot so the next observe always emits
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot() {
        let state = GameState::new();
        let hud = HudSnapshot::capture(&state);
        assert_eq!(hud.score, 0);
        assert_eq!(hud.coins, 0);
        assert_eq!(hud.lives, 3);
        assert!(hud.power_status.is_empty());
    }

    #[test]
    fn test_tracker_only_reports_changes() {
        let mut state = GameState::new();
        let mut tracker = HudTracker::new();
        assert!(tracker.observe(&state).is_some());
        assert!(tracker.observe(&state).is_none());
        state.score += 100;
        assert_eq!(tracker.observe(&state).map(|h| h.score), Some(100));
        tracker.invalidate();
        assert!(tracker.observe(&state).is_some());
    }

    #[test]
    fn test_power_status_label() {
        let mut state = GameState::new();
        state.player.set_tier(PowerTier::FireCapable);
        state.player.timers.star = 5;
        assert_eq!(power_status(&state), "🔥 Fire Power! ⭐ Star Power!");
        state.player.timers.transforming = 1;
        assert!(power_status(&state).ends_with("✨ Transforming..."));
    }
}
