//! Horizontal follow camera

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCROLL, VIEWPORT_WIDTH};

/// Scroll offset of the viewport's left edge in level coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
}

impl Camera {
    /// Where the camera wants to be: player a third of the way across the screen
    #[inline]
    pub fn target_for(player_x: f32) -> f32 {
        player_x - VIEWPORT_WIDTH / 3.0
    }

    /// Ease toward the target by `smoothing` of the remaining distance, then clamp
    pub fn follow(&mut self, player_x: f32, smoothing: f32) {
        let target = Self::target_for(player_x);
        self.x += (target - self.x) * smoothing;
        self.x = self.x.clamp(0.0, MAX_SCROLL);
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
    }

    /// Horizontal span visible on screen
    pub fn visible_span(&self) -> (f32, f32) {
        (self.x, self.x + VIEWPORT_WIDTH)
    }
}
