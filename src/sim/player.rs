//! Player controller and power tiers
//!
//! Input becomes velocity here, and every tier change, pickup, hit, life
//! loss and respawn goes through one of these functions so the HUD events
//! and the feet-anchoring rule are never skipped.

use glam::Vec2;

use super::state::{Facing, GameEvent, GamePhase, GameState, Player, PowerTier, Projectile, Reward};
use super::tick::TickInput;
use crate::consts::*;

/// Turn held actions into velocity, jump and fire
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    let tuning = &state.tuning;
    let player = &mut state.player;
    let star = player.has_star();

    let run = if star {
        tuning.run_speed * tuning.star_speed_multiplier
    } else {
        tuning.run_speed
    };

    if input.left {
        player.vel.x = -run;
        player.facing = Facing::Left;
    } else if input.right {
        player.vel.x = run;
        player.facing = Facing::Right;
    } else {
        player.vel.x *= tuning.friction;
    }

    if input.jump && player.on_ground {
        player.vel.y = if star {
            tuning.jump_impulse * tuning.star_jump_multiplier
        } else {
            tuning.jump_impulse
        };
        player.on_ground = false;
    }

    if input.fire {
        shoot_fireball(state);
    }
}

/// Throw a fireball from the leading edge if fire-capable and off cooldown
pub fn shoot_fireball(state: &mut GameState) -> Option<u32> {
    let player = &state.player;
    if player.tier != PowerTier::FireCapable || player.timers.fire_cooldown > 0 {
        return None;
    }

    let x = match player.facing {
        Facing::Right => player.pos.x + player.size.x,
        Facing::Left => player.pos.x,
    };
    let y = player.pos.y + player.size.y / 2.0;
    let vx = player.facing.sign() * FIREBALL_SPEED;

    let id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id,
        pos: Vec2::new(x, y),
        vel: Vec2::new(vx, 0.0),
        size: Vec2::splat(FIREBALL_SIZE),
        bounces: 0,
    });
    state.player.timers.fire_cooldown = state.tuning.fire_cooldown_ticks;
    state.events.push(GameEvent::FireballShot { id });
    Some(id)
}

/// Gravity and velocity integration for the player
pub fn integrate(state: &mut GameState) {
    let player = &mut state.player;
    player.vel.y += state.tuning.gravity;
    player.pos += player.vel;
    player.animate();
}

/// Switch tiers, keeping the feet anchored and reporting the change
fn change_tier(state: &mut GameState, to: PowerTier) {
    let from = state.player.tier;
    if from == to {
        return;
    }
    state.player.set_tier(to);
    state.events.push(GameEvent::TierChanged { from, to });
    log::info!("Power tier {} -> {}", from.as_str(), to.as_str());
}

/// Apply a collected power-up
pub fn collect_power_up(state: &mut GameState, kind: Reward) {
    match kind {
        Reward::Mushroom => {
            // Already big: the mushroom is simply eaten
            if state.player.tier == PowerTier::Base {
                change_tier(state, PowerTier::Grown);
                state.player.timers.transforming = TRANSFORM_FLASH_TICKS;
                state.award(POWERUP_POINTS);
            }
        }
        Reward::Flower => {
            if state.player.tier == PowerTier::Base {
                change_tier(state, PowerTier::Grown);
            }
            change_tier(state, PowerTier::FireCapable);
            state.player.timers.transforming = TRANSFORM_FLASH_TICKS;
            state.award(POWERUP_POINTS);
        }
        Reward::Star => {
            let ticks = state.tuning.star_ticks;
            state.player.timers.star = ticks;
            state.player.timers.invincible = ticks;
            state.award(POWERUP_POINTS);
            state.events.push(GameEvent::StarStarted);
            log::info!("Star power for {} ticks", ticks);
        }
    }
}

/// Adversary contact without star or invincibility
///
/// Big players shrink back to Base; Base players lose a life.
pub fn take_damage(state: &mut GameState) {
    let player = &mut state.player;
    player.timers.invincible = DAMAGE_INVINCIBLE_TICKS;
    player.vel = Vec2::new(-player.facing.sign() * KNOCKBACK_X, KNOCKBACK_Y);

    if player.tier != PowerTier::Base {
        player.timers.transforming = DAMAGE_FLASH_TICKS;
        change_tier(state, PowerTier::Base);
        state.events.push(GameEvent::PlayerDamaged);
    } else {
        lose_life(state);
    }
}

/// Remove a life; ends the session on the last one. Returns lives left.
pub fn lose_life(state: &mut GameState) -> u32 {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        lives_left: state.lives,
    });
    log::info!("Life lost, {} left", state.lives);
    if state.lives == 0 {
        game_over(state);
    }
    state.lives
}

/// Fell out of the level: lose a life and respawn unless it was the last
pub fn fall_out(state: &mut GameState) {
    if lose_life(state) > 0 {
        respawn(state);
    }
}

/// Back to the spawn point as a fresh Base player
pub fn respawn(state: &mut GameState) {
    state.player = Player::spawn();
    state.camera.reset();
    state.events.push(GameEvent::Respawned);
    log::info!("Respawned at ({}, {})", SPAWN_X, SPAWN_Y);
}

pub fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver { score: state.score });
    log::info!("Game over, final score {}", state.score);
}

pub fn reach_goal(state: &mut GameState) {
    state.award(GOAL_POINTS);
    state.phase = GamePhase::Won;
    state.events.push(GameEvent::GoalReached { score: state.score });
    log::info!("Goal reached, final score {}", state.score);
}
