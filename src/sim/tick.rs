//! Per-frame simulation tick
//!
//! Stages run in a fixed order. Entity stores are mutated first and compacted
//! afterwards, so a removal never shifts indices under a running loop.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Side, has_footing, is_supported, land_on, resolve_box, wall_contact};
use super::player;
use super::state::{Adversary, GameEvent, GameState, Platform, PlatformKind};
use crate::Rect;
use crate::consts::*;

/// Logical actions held during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub fire: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Terminal phases wait for a restart
    if state.phase.is_terminal() {
        return;
    }

    state.time_ticks += 1;
    state.player.timers.tick();

    player::apply_input(state, input);
    player::integrate(state);

    resolve_platforms(state);
    if state.phase.is_terminal() {
        return;
    }

    update_power_ups(state);
    update_projectiles(state);
    collect_coins(state);

    update_adversaries(state);
    if state.phase.is_terminal() {
        return;
    }

    if state.player.pos.y > FALL_LIMIT {
        player::fall_out(state);
        if state.phase.is_terminal() {
            return;
        }
    }

    // Level's left edge
    state.player.pos.x = state.player.pos.x.max(0.0);

    let smoothing = state.tuning.camera_smoothing;
    state.camera.follow(state.player.pos.x, smoothing);
}

/// Win zone around the flag pole
fn goal_zone(flag: &Rect) -> Rect {
    Rect {
        pos: flag.pos,
        size: Vec2::new(GOAL_ZONE_WIDTH, flag.size.y),
    }
}

/// Push the player out of every solid platform; strike blocks from below
fn resolve_platforms(state: &mut GameState) {
    state.player.on_ground = false;
    let mut reached_goal = false;

    for i in 0..state.platforms.len() {
        let platform = state.platforms[i];

        if platform.kind == PlatformKind::Goal {
            if state.player.rect().overlaps(&goal_zone(&platform.rect)) {
                reached_goal = true;
            }
            continue;
        }

        let player = &mut state.player;
        match resolve_box(&mut player.pos, player.size, &mut player.vel, &platform.rect) {
            Some(Side::Top) => player.on_ground = true,
            Some(Side::Bottom) => {
                if let Some(reward) = state.platforms[i].activate() {
                    state.award(BLOCK_HIT_POINTS);
                    state.events.push(GameEvent::BlockActivated {
                        platform: i,
                        reward,
                    });
                    state.spawn_power_up(platform.rect, reward);
                }
            }
            _ => {}
        }
    }

    if reached_goal {
        player::reach_goal(state);
    }
}

/// Fall, land, patrol, get picked up, drop out of the level
fn update_power_ups(state: &mut GameState) {
    let gravity = state.tuning.gravity * POWERUP_GRAVITY_SCALE;
    let platforms = &state.platforms;

    for power_up in state.power_ups.iter_mut() {
        let prev_bottom = power_up.rect().bottom();
        power_up.vel.y += gravity;
        power_up.pos.y += power_up.vel.y;

        for platform in platforms.iter().filter(|p| p.is_solid()) {
            if land_on(
                &mut power_up.pos,
                power_up.size,
                &mut power_up.vel,
                prev_bottom,
                &platform.rect,
            ) {
                power_up.on_ground = true;
            }
        }

        // Patrol: turn around instead of walking off the edge
        if power_up.on_ground {
            let ahead = Rect {
                pos: power_up.pos + Vec2::new(power_up.vel.x, 0.0),
                size: power_up.size,
            };
            if is_supported(&ahead, platforms) {
                power_up.pos = ahead.pos;
            } else {
                power_up.vel.x = -power_up.vel.x;
            }
        }
    }

    let mut taken = Vec::new();
    for i in 0..state.power_ups.len() {
        let power_up = &state.power_ups[i];
        if state.player.rect().overlaps(&power_up.rect()) {
            let (id, kind) = (power_up.id, power_up.kind);
            taken.push(id);
            state.events.push(GameEvent::PowerUpCollected { id, kind });
            log::debug!("Collected {:?} power-up #{}", kind, id);
            player::collect_power_up(state, kind);
        }
    }

    state
        .power_ups
        .retain(|p| !taken.contains(&p.id) && p.pos.y < FALL_LIMIT);
}

/// Fly, bounce, burn adversaries, retire
fn update_projectiles(state: &mut GameState) {
    let gravity = state.tuning.gravity * FIREBALL_GRAVITY_SCALE;
    let platforms = &state.platforms;

    for fireball in state.projectiles.iter_mut() {
        fireball.pos.x += fireball.vel.x;
        let prev_bottom = fireball.rect().bottom();
        fireball.vel.y += gravity;
        fireball.pos.y += fireball.vel.y;

        for platform in platforms.iter().filter(|p| p.is_solid()) {
            if land_on(
                &mut fireball.pos,
                fireball.size,
                &mut fireball.vel,
                prev_bottom,
                &platform.rect,
            ) {
                fireball.vel.y = FIREBALL_REBOUND;
                fireball.bounces += 1;
            }
        }
    }

    // Fireballs pass through what they burn
    let mut burned = Vec::new();
    for fireball in &state.projectiles {
        let rect = fireball.rect();
        for (i, adversary) in state.adversaries.iter().enumerate() {
            if adversary.alive && !burned.contains(&i) && rect.overlaps(&adversary.rect()) {
                burned.push(i);
            }
        }
    }
    for i in burned {
        defeat_adversary(state, i);
    }

    let (view_left, view_right) = state.camera.visible_span();
    state.projectiles.retain(|f| {
        f.bounces < FIREBALL_MAX_BOUNCES
            && f.pos.x > view_left - FIREBALL_WINDOW_MARGIN
            && f.pos.x < view_right + FIREBALL_WINDOW_MARGIN
            && f.pos.y < VIEWPORT_HEIGHT
    });
}

/// Pick up every coin near the player's center
fn collect_coins(state: &mut GameState) {
    let center = state.player.rect().center();
    let mut picked = 0;

    for (i, coin) in state.coins.iter_mut().enumerate() {
        if coin.collected {
            continue;
        }
        let d = (center - coin.pos).abs();
        if d.x < COIN_RADIUS && d.y < COIN_RADIUS {
            coin.collected = true;
            picked += 1;
            state.events.push(GameEvent::CoinCollected { coin: i });
        }
    }

    state.coins_collected += picked;
    state.award(u64::from(picked) * COIN_POINTS);
}

fn defeat_adversary(state: &mut GameState, index: usize) {
    let Some(adversary) = state.adversaries.get_mut(index) else {
        return;
    };
    if !adversary.alive {
        return;
    }
    adversary.alive = false;
    state.award(DEFEAT_POINTS);
    state.events.push(GameEvent::AdversaryDefeated { adversary: index });
    log::debug!("Adversary {} defeated", index);
}

/// Walk one step, turning at walls, ledges and the patrol bounds
fn patrol(adversary: &mut Adversary, platforms: &[Platform]) {
    adversary.pos.x += adversary.vel.x;

    let rect = adversary.rect();
    let lead = if adversary.vel.x > 0.0 {
        rect.right()
    } else {
        rect.left()
    };
    let blocked = wall_contact(&rect, platforms).is_some();
    let ledge = !has_footing(lead, rect.bottom(), platforms);
    let out_of_bounds = adversary.pos.x < ADVERSARY_MIN_X || adversary.pos.x > ADVERSARY_MAX_X;

    if blocked || ledge || out_of_bounds {
        adversary.pos.x -= adversary.vel.x;
        adversary.vel.x = -adversary.vel.x;
    }
}

/// Move adversaries and settle contact with the player
///
/// Adversaries never collide with each other. A stomp is judged on the
/// player's fall coming into this stage, so one landing can flatten a stack.
fn update_adversaries(state: &mut GameState) {
    let falling = state.player.vel.y > 0.0;
    for i in 0..state.adversaries.len() {
        if !state.adversaries[i].alive {
            continue;
        }
        patrol(&mut state.adversaries[i], &state.platforms);

        let enemy = state.adversaries[i].rect();
        if !state.player.rect().overlaps(&enemy) {
            continue;
        }

        if state.player.has_star() {
            defeat_adversary(state, i);
        } else if !state.player.is_invincible() {
            let above_midpoint = state.player.rect().bottom() < enemy.center().y;
            if falling && above_midpoint {
                defeat_adversary(state, i);
                state.player.vel.y = STOMP_BOUNCE;
            } else {
                player::take_damage(state);
                if state.phase.is_terminal() {
                    return;
                }
            }
        }
    }
}
