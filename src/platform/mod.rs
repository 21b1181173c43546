//! Platform abstraction layer
//!
//! Maps raw key codes onto logical actions for every target, and on wasm32
//! exposes the session to the JS renderer/HUD as JSON.

use crate::sim::TickInput;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Keyboard codes (`KeyboardEvent.code`) bound to each action
pub const LEFT_KEYS: &[&str] = &["ArrowLeft", "KeyA"];
pub const RIGHT_KEYS: &[&str] = &["ArrowRight", "KeyD"];
pub const JUMP_KEYS: &[&str] = &["Space", "ArrowUp", "KeyW"];
pub const FIRE_KEYS: &[&str] = &["KeyX"];

/// Build the held-action set from the key codes currently down
pub fn input_from_keys<'a>(held: impl IntoIterator<Item = &'a str>) -> TickInput {
    let mut input = TickInput::default();
    for code in held {
        let bound = |keys: &[&str]| keys.iter().any(|k| *k == code);
        input.left |= bound(LEFT_KEYS);
        input.right |= bound(RIGHT_KEYS);
        input.jump |= bound(JUMP_KEYS);
        input.fire |= bound(FIRE_KEYS);
    }
    input
}
