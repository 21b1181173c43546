//! The built-in level
//!
//! A single fixed layout: four ground strips separated by pits, floating
//! bricks, three trigger blocks, two pipes and the flag at the far end.

use super::state::{Adversary, Coin, Platform, PlatformKind, Reward};

pub const PLATFORMS: &[Platform] = &[
    // Ground
    Platform::new(0.0, 360.0, 500.0, 40.0, PlatformKind::Ground),
    Platform::new(550.0, 360.0, 300.0, 40.0, PlatformKind::Ground),
    Platform::new(900.0, 360.0, 400.0, 40.0, PlatformKind::Ground),
    Platform::new(1350.0, 360.0, 600.0, 40.0, PlatformKind::Ground),
    // Floating
    Platform::new(200.0, 280.0, 100.0, 20.0, PlatformKind::Brick),
    Platform::new(350.0, 220.0, 80.0, 20.0, PlatformKind::Brick),
    Platform::block(250.0, 180.0, 60.0, 20.0, Reward::Mushroom),
    Platform::new(650.0, 200.0, 120.0, 20.0, PlatformKind::Brick),
    Platform::block(700.0, 120.0, 60.0, 20.0, Reward::Flower),
    Platform::new(850.0, 260.0, 80.0, 20.0, PlatformKind::Brick),
    Platform::block(950.0, 180.0, 60.0, 20.0, Reward::Star),
    Platform::new(1150.0, 280.0, 80.0, 20.0, PlatformKind::Brick),
    Platform::new(1300.0, 220.0, 100.0, 20.0, PlatformKind::Brick),
    Platform::new(1450.0, 160.0, 120.0, 20.0, PlatformKind::Brick),
    // Pipes
    Platform::new(400.0, 310.0, 50.0, 50.0, PlatformKind::Pipe),
    Platform::new(1100.0, 290.0, 50.0, 70.0, PlatformKind::Pipe),
    // Flag
    Platform::new(1850.0, 160.0, 10.0, 200.0, PlatformKind::Goal),
];

pub const COINS: &[Coin] = &[
    Coin::new(220.0, 240.0),
    Coin::new(250.0, 240.0),
    Coin::new(370.0, 180.0),
    Coin::new(270.0, 140.0),
    Coin::new(680.0, 160.0),
    Coin::new(720.0, 160.0),
    Coin::new(720.0, 80.0),
    Coin::new(870.0, 220.0),
    Coin::new(970.0, 140.0),
    Coin::new(1170.0, 240.0),
    Coin::new(1330.0, 180.0),
    Coin::new(1470.0, 120.0),
    Coin::new(1500.0, 120.0),
];

pub const ADVERSARIES: &[Adversary] = &[
    Adversary::walker(300.0, 330.0, -1.0),
    Adversary::walker(600.0, 330.0, -1.0),
    Adversary::walker(950.0, 330.0, 1.0),
    Adversary::walker(1200.0, 330.0, -1.0),
    Adversary::walker(1450.0, 330.0, 1.0),
    Adversary::walker(1600.0, 330.0, -1.0),
];
