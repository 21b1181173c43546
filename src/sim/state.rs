//! Game state and core simulation types
//!
//! Everything the tick mutates lives in `GameState`; presentation code only
//! ever sees it through `FrameView`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::level;
use crate::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// All lives lost
    GameOver,
    /// Goal reached
    Won,
}

impl GamePhase {
    /// Terminal phases halt ticking until a restart
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Player power tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PowerTier {
    #[default]
    Base,
    Grown,
    FireCapable,
}

impl PowerTier {
    /// Body height for this tier; width never changes
    pub fn height(self) -> f32 {
        match self {
            PowerTier::Base => BASE_HEIGHT,
            PowerTier::Grown | PowerTier::FireCapable => GROWN_HEIGHT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PowerTier::Base => "Base",
            PowerTier::Grown => "Grown",
            PowerTier::FireCapable => "FireCapable",
        }
    }
}

/// Which way the player is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Decrement a countdown, flooring at zero
#[inline]
pub fn count_down(ticks: &mut u32) {
    *ticks = ticks.saturating_sub(1);
}

/// Player countdown timers, all in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Countdowns {
    /// Immune to adversary contact damage
    pub invincible: u32,
    /// Star power: invincible, defeats adversaries on touch, faster
    pub star: u32,
    /// Flash after a tier change (cosmetic)
    pub transforming: u32,
    /// Ticks until another fireball may be thrown
    pub fire_cooldown: u32,
}

impl Countdowns {
    /// Advance every timer by one tick
    pub fn tick(&mut self) {
        count_down(&mut self.invincible);
        count_down(&mut self.star);
        count_down(&mut self.transforming);
        count_down(&mut self.fire_cooldown);
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    pub on_ground: bool,
    pub tier: PowerTier,
    pub timers: Countdowns,
    /// Walk cycle frame for the renderer
    pub anim_frame: u32,
    anim_timer: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn()
    }
}

impl Player {
    /// Fresh player at the spawn point
    pub fn spawn() -> Self {
        let tier = PowerTier::Base;
        Self {
            pos: Vec2::new(SPAWN_X, SPAWN_Y),
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, tier.height()),
            facing: Facing::Right,
            on_ground: false,
            tier,
            timers: Countdowns::default(),
            anim_frame: 0,
            anim_timer: 0,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Change tier, re-deriving the height and keeping the feet where they were
    pub fn set_tier(&mut self, tier: PowerTier) {
        let feet = self.pos.y + self.size.y;
        self.tier = tier;
        self.size.y = tier.height();
        self.pos.y = feet - self.size.y;
    }

    #[inline]
    pub fn has_star(&self) -> bool {
        self.timers.star > 0
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.timers.invincible > 0
    }

    /// Advance the walk cycle while moving
    pub fn animate(&mut self) {
        if self.vel.x.abs() > 0.5 {
            self.anim_timer += 1;
            if self.anim_timer > 5 {
                self.anim_frame = self.anim_frame.wrapping_add(1);
                self.anim_timer = 0;
            }
        }
    }
}

/// Contents of a trigger block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reward {
    Mushroom,
    Flower,
    Star,
}

/// Platform types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformKind {
    Ground,
    Brick,
    /// Dispenses its reward the first time it is struck from below
    Block { reward: Reward, used: bool },
    Pipe,
    /// Flag pole; touching it wins, it is never solid
    Goal,
}

/// A static level rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            kind,
        }
    }

    pub const fn block(x: f32, y: f32, w: f32, h: f32, reward: Reward) -> Self {
        Self::new(x, y, w, h, PlatformKind::Block { reward, used: false })
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        self.kind != PlatformKind::Goal
    }

    /// Mark an unused trigger block as used, returning its reward
    pub fn activate(&mut self) -> Option<Reward> {
        match &mut self.kind {
            PlatformKind::Block { reward, used } if !*used => {
                *used = true;
                Some(*reward)
            }
            _ => None,
        }
    }

    /// Put a trigger block back to unused
    pub fn reset(&mut self) {
        if let PlatformKind::Block { used, .. } = &mut self.kind {
            *used = false;
        }
    }
}

/// A coin; collected coins stay in the store, hidden
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub collected: bool,
}

impl Coin {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            collected: false,
        }
    }
}

/// Adversary types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdversaryKind {
    Walker,
}

/// A patrolling adversary; defeated ones stay in the store
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adversary {
    pub kind: AdversaryKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub alive: bool,
}

impl Adversary {
    pub const fn walker(x: f32, y: f32, vx: f32) -> Self {
        Self {
            kind: AdversaryKind::Walker,
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, 0.0),
            size: Vec2::new(32.0, 30.0),
            alive: true,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A power-up released from a trigger block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: Reward,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
}

impl PowerUp {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A bouncing fireball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub bounces: u32,
}

impl Projectile {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BlockActivated { platform: usize, reward: Reward },
    PowerUpSpawned { id: u32, kind: Reward },
    PowerUpCollected { id: u32, kind: Reward },
    TierChanged { from: PowerTier, to: PowerTier },
    StarStarted,
    CoinCollected { coin: usize },
    AdversaryDefeated { adversary: usize },
    FireballShot { id: u32 },
    PlayerDamaged,
    LifeLost { lives_left: u32 },
    Respawned,
    GoalReached { score: u64 },
    GameOver { score: u64 },
    Restarted,
}

/// Read-only view handed to the renderer after each tick
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameView<'a> {
    pub camera_x: f32,
    pub player: &'a Player,
    pub platforms: &'a [Platform],
    pub coins: &'a [Coin],
    pub power_ups: &'a [PowerUp],
    pub projectiles: &'a [Projectile],
    pub adversaries: &'a [Adversary],
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub coins_collected: u32,
    pub lives: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub camera: Camera,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub adversaries: Vec<Adversary>,
    pub power_ups: Vec<PowerUp>,
    pub projectiles: Vec<Projectile>,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// New session on the built-in level with default tuning
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            tuning,
            phase: GamePhase::Playing,
            score: 0,
            coins_collected: 0,
            lives: STARTING_LIVES,
            time_ticks: 0,
            player: Player::spawn(),
            camera: Camera::default(),
            platforms: level::PLATFORMS.to_vec(),
            coins: level::COINS.to_vec(),
            adversaries: level::ADVERSARIES.to_vec(),
            power_ups: Vec::new(),
            projectiles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Put every mutable entity and counter back to its session-start value
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.coins_collected = 0;
        self.lives = STARTING_LIVES;
        self.time_ticks = 0;
        self.player = Player::spawn();
        self.camera = Camera::default();
        self.platforms.iter_mut().for_each(Platform::reset);
        self.coins.iter_mut().for_each(|c| c.collected = false);
        self.adversaries = level::ADVERSARIES.to_vec();
        self.power_ups.clear();
        self.projectiles.clear();
        self.events.clear();
        self.next_id = 1;
        self.events.push(GameEvent::Restarted);
        log::info!("Session restarted");
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn award(&mut self, points: u64) {
        self.score += points;
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn frame(&self) -> FrameView<'_> {
        FrameView {
            camera_x: self.camera.x,
            player: &self.player,
            platforms: &self.platforms,
            coins: &self.coins,
            power_ups: &self.power_ups,
            projectiles: &self.projectiles,
            adversaries: &self.adversaries,
        }
    }

    /// Release a power-up above a trigger block
    pub fn spawn_power_up(&mut self, block: Rect, kind: Reward) {
        let id = self.next_entity_id();
        self.power_ups.push(PowerUp {
            id,
            kind,
            pos: Vec2::new(
                block.left() + block.size.x / 2.0 - POWERUP_SIZE / 2.0,
                block.top() - 40.0,
            ),
            vel: Vec2::new(POWERUP_WALK, POWERUP_RISE),
            size: Vec2::splat(POWERUP_SIZE),
            on_ground: false,
        });
        self.events.push(GameEvent::PowerUpSpawned { id, kind });
        log::debug!("Spawned {:?} power-up #{}", kind, id);
    }
}
