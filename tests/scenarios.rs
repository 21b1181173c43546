//! End-to-end gameplay scenarios on the built-in level

use brick_dash::consts::*;
use brick_dash::sim::level;
use brick_dash::sim::{
    Adversary, GameEvent, GamePhase, GameState, PlatformKind, Player, PowerTier, PowerUp, Reward,
    TickInput, tick,
};
use glam::Vec2;

const IDLE: TickInput = TickInput {
    left: false,
    right: false,
    jump: false,
    fire: false,
};

/// Base player standing on the first ground strip, no adversaries around
fn quiet_state() -> GameState {
    let mut state = GameState::new();
    state.adversaries.clear();
    state.player.pos = Vec2::new(100.0, 320.0);
    tick(&mut state, &IDLE);
    state
}

fn power_up_at(state: &mut GameState, kind: Reward, pos: Vec2) {
    let id = state.next_entity_id();
    state.power_ups.push(PowerUp {
        id,
        kind,
        pos,
        vel: Vec2::ZERO,
        size: Vec2::splat(POWERUP_SIZE),
        on_ground: true,
    });
}

fn mushroom_block_index(state: &GameState) -> usize {
    state
        .platforms
        .iter()
        .position(|p| {
            matches!(
                p.kind,
                PlatformKind::Block {
                    reward: Reward::Mushroom,
                    ..
                }
            )
        })
        .unwrap()
}

fn is_used(state: &GameState, index: usize) -> bool {
    matches!(state.platforms[index].kind, PlatformKind::Block { used: true, .. })
}

/// Jump into the mushroom block from directly underneath
fn strike_mushroom_block(state: &mut GameState) {
    state.player.pos = Vec2::new(262.0, 205.0);
    state.player.vel = Vec2::new(0.0, -10.0);
    tick(state, &IDLE);
}

#[test]
fn scripted_run_never_ends_inside_a_platform() {
    let mut state = GameState::new();
    for frame in 0..900u32 {
        let input = TickInput {
            right: frame % 200 < 150,
            left: frame % 200 >= 170,
            jump: frame % 37 < 6,
            fire: true,
        };
        tick(&mut state, &input);
        if state.phase.is_terminal() {
            break;
        }
        let body = state.player.rect();
        for (i, platform) in state.platforms.iter().enumerate() {
            if platform.is_solid() {
                assert!(
                    !body.overlaps(&platform.rect),
                    "frame {frame}: player {:?} inside platform {i}",
                    body
                );
            }
        }
    }
}

#[test]
fn landing_sets_ground_and_zeroes_fall() {
    let mut state = GameState::new();
    state.adversaries.clear();
    // Feet at 352 falling 9.6 this tick: they cross the ground top at 360
    state.player.pos = Vec2::new(100.0, 312.0);
    state.player.vel = Vec2::new(0.0, 9.0);
    assert!(!state.player.on_ground);
    tick(&mut state, &IDLE);
    assert!(state.player.on_ground);
    assert_eq!(state.player.vel.y, 0.0);
    assert_eq!(state.player.rect().bottom(), 360.0);
}

#[test]
fn block_strike_spawns_mushroom_and_scores() {
    let mut state = quiet_state();
    let block = mushroom_block_index(&state);
    let score = state.score;
    state.drain_events();

    strike_mushroom_block(&mut state);

    assert!(is_used(&state, block));
    assert_eq!(state.score - score, 200);
    assert_eq!(state.power_ups.len(), 1);
    assert_eq!(state.power_ups[0].kind, Reward::Mushroom);
    // Popped out at (block center - 15, block top - 40), one tick of flight applied
    assert_eq!(state.power_ups[0].pos.x, 265.0);
    assert!((state.power_ups[0].pos.y - (140.0 - 8.0 + 0.48)).abs() < 1e-4);
    assert!(state.drain_events().contains(&GameEvent::BlockActivated {
        platform: block,
        reward: Reward::Mushroom
    }));
}

#[test]
fn block_is_used_at_most_once() {
    let mut state = quiet_state();
    let block = mushroom_block_index(&state);

    strike_mushroom_block(&mut state);
    let score = state.score;
    state.power_ups.clear();
    strike_mushroom_block(&mut state);

    assert!(is_used(&state, block));
    assert_eq!(state.score, score);
    assert!(state.power_ups.is_empty());
}

#[test]
fn standing_on_a_block_does_not_use_it() {
    let mut state = quiet_state();
    let block = mushroom_block_index(&state);
    state.player.pos = Vec2::new(262.0, 140.0);
    for _ in 0..30 {
        tick(&mut state, &IDLE);
    }
    assert!(state.player.on_ground);
    assert!(!is_used(&state, block));
}

#[test]
fn mushroom_grows_base_player() {
    let mut state = quiet_state();
    let feet = state.player.rect().bottom();
    let score = state.score;
    power_up_at(&mut state, Reward::Mushroom, Vec2::new(105.0, 330.0));

    tick(&mut state, &IDLE);

    assert_eq!(state.player.tier, PowerTier::Grown);
    assert_eq!(state.score - score, 1000);
    assert_eq!(state.player.size.y, BASE_HEIGHT + 20.0);
    assert_eq!(state.player.rect().bottom(), feet);
    assert_eq!(state.player.timers.transforming, TRANSFORM_FLASH_TICKS);
    assert!(state.power_ups.is_empty());
}

#[test]
fn tiers_climb_one_pickup_at_a_time() {
    let mut state = quiet_state();
    power_up_at(&mut state, Reward::Mushroom, Vec2::new(105.0, 330.0));
    tick(&mut state, &IDLE);
    assert_eq!(state.player.tier, PowerTier::Grown);

    power_up_at(&mut state, Reward::Flower, Vec2::new(105.0, 330.0));
    tick(&mut state, &IDLE);
    assert_eq!(state.player.tier, PowerTier::FireCapable);
}

#[test]
fn flower_at_base_skips_to_fire() {
    let mut state = quiet_state();
    power_up_at(&mut state, Reward::Flower, Vec2::new(105.0, 330.0));
    tick(&mut state, &IDLE);
    assert_eq!(state.player.tier, PowerTier::FireCapable);
    assert_eq!(state.player.size.y, GROWN_HEIGHT);
    let events = state.drain_events();
    assert!(events.contains(&GameEvent::TierChanged {
        from: PowerTier::Base,
        to: PowerTier::Grown
    }));
    assert!(events.contains(&GameEvent::TierChanged {
        from: PowerTier::Grown,
        to: PowerTier::FireCapable
    }));
}

#[test]
fn star_and_invincibility_expire_together() {
    let mut state = quiet_state();
    power_up_at(&mut state, Reward::Star, Vec2::new(105.0, 330.0));
    tick(&mut state, &IDLE);
    assert_eq!(state.player.timers.star, state.tuning.star_ticks);
    assert_eq!(state.player.timers.invincible, state.tuning.star_ticks);

    let mut ticks = 0;
    while state.player.timers.star > 0 {
        assert!(state.player.is_invincible());
        tick(&mut state, &IDLE);
        ticks += 1;
    }
    assert_eq!(state.player.timers.invincible, 0);
    assert_eq!(ticks, state.tuning.star_ticks);
}

#[test]
fn coins_pay_out_once() {
    let mut state = quiet_state();
    // Hover the player's center on the coin at (220, 240)
    let park = |state: &mut GameState| {
        state.player.pos = Vec2::new(204.0, 220.0);
        state.player.vel = Vec2::new(0.0, -0.6);
    };
    park(&mut state);
    tick(&mut state, &IDLE);
    let (score, coins) = (state.score, state.coins_collected);
    assert!(state.coins[0].collected);
    assert_eq!(coins, 1);
    assert_eq!(score, COIN_POINTS);

    for _ in 0..5 {
        park(&mut state);
        tick(&mut state, &IDLE);
    }
    assert_eq!(state.score, score);
    assert_eq!(state.coins_collected, coins);
}

#[test]
fn star_player_plows_through_adversary() {
    let mut state = quiet_state();
    state.player.timers.star = 100;
    state.player.timers.invincible = 100;
    state.adversaries = vec![Adversary::walker(115.0, 330.0, 0.0)];
    let score = state.score;

    tick(&mut state, &IDLE);

    assert!(!state.adversaries[0].alive);
    assert_eq!(state.score - score, 200);
    assert_eq!(state.lives, STARTING_LIVES);
    assert_eq!(state.player.tier, PowerTier::Base);
    assert_eq!(state.player.timers.invincible, 99);
}

#[test]
fn defeated_adversaries_stay_in_the_roster() {
    let mut state = quiet_state();
    state.player.timers.star = 100;
    state.adversaries = vec![Adversary::walker(115.0, 330.0, 0.0)];
    tick(&mut state, &IDLE);
    let frozen = state.adversaries[0];
    tick(&mut state, &IDLE);
    assert_eq!(state.adversaries.len(), 1);
    assert_eq!(state.adversaries[0], frozen);
}

#[test]
fn falling_out_on_last_life_ends_the_game() {
    let mut state = quiet_state();
    state.lives = 1;
    state.player.pos = Vec2::new(520.0, 460.0);

    tick(&mut state, &IDLE);

    assert_eq!(state.lives, 0);
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(state.player.pos.y > FALL_LIMIT);
    assert!(!state.drain_events().contains(&GameEvent::Respawned));

    // Frozen until restart
    let frozen = state.player.clone();
    tick(&mut state, &TickInput {
        right: true,
        ..IDLE
    });
    assert_eq!(state.player, frozen);
}

#[test]
fn falling_out_with_lives_left_respawns() {
    let mut state = quiet_state();
    state.player.set_tier(PowerTier::FireCapable);
    state.camera.x = 300.0;
    state.player.pos = Vec2::new(520.0, 460.0);

    tick(&mut state, &IDLE);

    assert_eq!(state.lives, STARTING_LIVES - 1);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.player.tier, PowerTier::Base);
    assert_eq!(state.player.pos.x, SPAWN_X);
    assert_eq!(state.camera.x, 0.0);
}

#[test]
fn restart_restores_everything() {
    let mut state = GameState::new();
    // Make a mess
    strike_mushroom_block(&mut state);
    state.coins[3].collected = true;
    state.coins_collected = 4;
    state.adversaries[0].alive = false;
    state.adversaries[1].pos.x += 40.0;
    state.player.set_tier(PowerTier::FireCapable);
    state.player.timers.star = 50;
    state.lives = 1;
    state.phase = GamePhase::GameOver;
    brick_dash::sim::player::shoot_fireball(&mut state);

    state.restart();

    assert_eq!(state.score, 0);
    assert_eq!(state.coins_collected, 0);
    assert_eq!(state.lives, 3);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.platforms, level::PLATFORMS);
    assert!(state.coins.iter().all(|c| !c.collected));
    assert_eq!(state.adversaries, level::ADVERSARIES);
    assert_eq!(state.player, Player::spawn());
    assert!(state.power_ups.is_empty());
    assert!(state.projectiles.is_empty());
    assert_eq!(state.camera.x, 0.0);
}

#[test]
fn reaching_the_flag_wins() {
    let mut state = GameState::new();
    state.adversaries.clear();
    state.player.pos = Vec2::new(1790.0, 320.0);
    let run = TickInput { right: true, ..IDLE };
    for _ in 0..60 {
        tick(&mut state, &run);
    }
    assert_eq!(state.phase, GamePhase::Won);
    assert_eq!(state.score, GOAL_POINTS);
}

#[test]
fn fire_is_rate_limited() {
    let mut state = quiet_state();
    state.player.set_tier(PowerTier::FireCapable);
    let fire = TickInput { fire: true, ..IDLE };
    let mut shots = 0;
    for _ in 0..(state.tuning.fire_cooldown_ticks * 3) {
        tick(&mut state, &fire);
        shots += state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::FireballShot { .. }))
            .count();
    }
    assert_eq!(shots, 3);
}
