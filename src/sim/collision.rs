//! Collision detection and response against static platforms
//!
//! The player gets full box resolution (push out along the shallower axis).
//! Power-ups, fireballs and adversaries only need to land on tops, find
//! footing, and notice walls.

use glam::Vec2;

use super::state::Platform;
use crate::Rect;
use crate::consts::SUPPORT_TOLERANCE;

/// Face of the solid the mover was pushed out through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Landed on top
    Top,
    /// Struck from below
    Bottom,
    /// Pushed back out the solid's left face
    Left,
    /// Pushed back out the solid's right face
    Right,
}

/// How far the mover reaches past each face of the solid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Penetration {
    pub fn between(mover: &Rect, solid: &Rect) -> Self {
        Self {
            left: mover.right() - solid.left(),
            right: solid.right() - mover.left(),
            top: mover.bottom() - solid.top(),
            bottom: solid.bottom() - mover.top(),
        }
    }

    /// Side to push out through; vertical wins only when strictly shallower
    pub fn exit_side(&self) -> Side {
        let min_x = self.left.min(self.right);
        let min_y = self.top.min(self.bottom);
        if min_y < min_x {
            if self.top < self.bottom {
                Side::Top
            } else {
                Side::Bottom
            }
        } else if self.left < self.right {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Push an overlapping box out of `solid`, zeroing the velocity on that axis
///
/// Returns the side it left through, or `None` when there was no overlap.
pub fn resolve_box(pos: &mut Vec2, size: Vec2, vel: &mut Vec2, solid: &Rect) -> Option<Side> {
    let mover = Rect { pos: *pos, size };
    if !mover.overlaps(solid) {
        return None;
    }

    let side = Penetration::between(&mover, solid).exit_side();
    match side {
        Side::Top => {
            pos.y = solid.top() - size.y;
            vel.y = 0.0;
        }
        Side::Bottom => {
            pos.y = solid.bottom();
            vel.y = 0.0;
        }
        Side::Left => {
            pos.x = solid.left() - size.x;
            vel.x = 0.0;
        }
        Side::Right => {
            pos.x = solid.right();
            vel.x = 0.0;
        }
    }
    Some(side)
}

/// Landing-only collision for falling entities
///
/// Snaps onto the top of `solid` when the bottom edge crossed it this tick
/// while moving down. Returns true on landing.
pub fn land_on(pos: &mut Vec2, size: Vec2, vel: &mut Vec2, prev_bottom: f32, solid: &Rect) -> bool {
    let mover = Rect { pos: *pos, size };
    let crossed = prev_bottom <= solid.top() && mover.bottom() >= solid.top();
    if vel.y > 0.0 && crossed && mover.overlaps_x(solid) {
        pos.y = solid.top() - size.y;
        vel.y = 0.0;
        true
    } else {
        false
    }
}

/// Whether a solid platform top lies just under the box
pub fn is_supported(rect: &Rect, platforms: &[Platform]) -> bool {
    platforms.iter().filter(|p| p.is_solid()).any(|p| {
        rect.overlaps_x(&p.rect)
            && rect.bottom() >= p.rect.top()
            && rect.bottom() <= p.rect.top() + SUPPORT_TOLERANCE
    })
}

/// Whether a solid platform top lies just under the point (x, feet)
pub fn has_footing(x: f32, feet: f32, platforms: &[Platform]) -> bool {
    platforms.iter().filter(|p| p.is_solid()).any(|p| {
        x >= p.rect.left()
            && x <= p.rect.right()
            && feet >= p.rect.top()
            && feet <= p.rect.top() + SUPPORT_TOLERANCE
    })
}

/// First solid platform the box runs into from the side
///
/// Platforms whose top is at or below the box's feet are floors, not walls.
pub fn wall_contact(rect: &Rect, platforms: &[Platform]) -> Option<usize> {
    platforms
        .iter()
        .position(|p| p.is_solid() && p.rect.top() < rect.bottom() && rect.overlaps(&p.rect))
}
