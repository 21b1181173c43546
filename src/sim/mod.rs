//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-unit timers only
//! - Fixed stage order inside a tick
//! - Stable store order (level order for static entities, spawn order otherwise)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod level;
pub mod player;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{Penetration, Side, resolve_box};
pub use state::{
    Adversary, AdversaryKind, Coin, Countdowns, Facing, FrameView, GameEvent, GamePhase,
    GameState, Platform, PlatformKind, Player, PowerTier, PowerUp, Projectile, Reward,
};
pub use tick::{TickInput, tick};
