//! Brick Dash - a side-scrolling platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, power tiers, entities)
//! - `hud`: Read-only scoreboard snapshots for the presentation layer
//! - `session`: Per-refresh frame driver and restart handling
//! - `platform`: Browser bridge
//! - `tuning`: Data-driven movement feel

pub mod hud;
pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use hud::{HudSnapshot, HudTracker};
pub use session::{FrameOutput, Session, SessionEnd};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Simulation rate the frame-unit timers are expressed in
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Visible window
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;
    /// Total level width; camera scrolls across [0, LEVEL_WIDTH - VIEWPORT_WIDTH]
    pub const LEVEL_WIDTH: f32 = 2000.0;
    pub const MAX_SCROLL: f32 = LEVEL_WIDTH - VIEWPORT_WIDTH;
    /// Player is lost once its top edge passes this line
    pub const FALL_LIMIT: f32 = VIEWPORT_HEIGHT + 50.0;

    /// Player defaults
    pub const SPAWN_X: f32 = 50.0;
    pub const SPAWN_Y: f32 = 300.0;
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const BASE_HEIGHT: f32 = 40.0;
    pub const GROWN_HEIGHT: f32 = 60.0;
    pub const STARTING_LIVES: u32 = 3;

    /// Timers (ticks)
    pub const TRANSFORM_FLASH_TICKS: u32 = 30;
    pub const DAMAGE_FLASH_TICKS: u32 = 60;
    pub const DAMAGE_INVINCIBLE_TICKS: u32 = 120;

    /// Impulses
    pub const STOMP_BOUNCE: f32 = -10.0;
    pub const KNOCKBACK_X: f32 = 5.0;
    pub const KNOCKBACK_Y: f32 = -8.0;

    /// Power-ups pop out of trigger blocks
    pub const POWERUP_SIZE: f32 = 30.0;
    pub const POWERUP_RISE: f32 = -8.0;
    pub const POWERUP_WALK: f32 = 2.0;
    pub const POWERUP_GRAVITY_SCALE: f32 = 0.8;
    /// Slack below a platform top that still counts as standing on it
    pub const SUPPORT_TOLERANCE: f32 = 10.0;

    /// Fireballs
    pub const FIREBALL_SIZE: f32 = 12.0;
    pub const FIREBALL_SPEED: f32 = 8.0;
    pub const FIREBALL_GRAVITY_SCALE: f32 = 0.5;
    pub const FIREBALL_REBOUND: f32 = -6.0;
    pub const FIREBALL_MAX_BOUNCES: u32 = 3;
    /// Horizontal margin around the viewport a fireball may stray into
    pub const FIREBALL_WINDOW_MARGIN: f32 = 50.0;

    /// Coin pickup distance from the player's center, per axis
    pub const COIN_RADIUS: f32 = 25.0;

    /// Adversary patrol limits
    pub const ADVERSARY_MIN_X: f32 = 0.0;
    pub const ADVERSARY_MAX_X: f32 = 1900.0;

    /// The flag pole triggers the win on a zone wider than its drawn pole
    pub const GOAL_ZONE_WIDTH: f32 = 50.0;

    /// Score awards
    pub const BLOCK_HIT_POINTS: u64 = 200;
    pub const POWERUP_POINTS: u64 = 1000;
    pub const COIN_POINTS: u64 = 100;
    pub const DEFEAT_POINTS: u64 = 200;
    pub const GOAL_POINTS: u64 = 1000;
}

/// Axis-aligned rectangle in level coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Horizontal spans overlap (strictly)
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }
}
