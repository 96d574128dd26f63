use glam::Vec2;

use crate::gesture::HandId;
use crate::tuning::{Tuning, Viewport};

/// An item picked from the palette and carried by a hand, not yet placed.
#[derive(Clone, Debug, PartialEq)]
pub struct Ghost {
    pub kind: String,
    pub hand: HandId,
    /// Follows the carrying pointer directly, no easing.
    pub pos: Vec2,
}

impl Ghost {
    pub fn new(kind: impl Into<String>, hand: HandId, pos: Vec2) -> Self {
        Self {
            kind: kind.into(),
            hand,
            pos,
        }
    }
}

/// A ghost released here lands in the world rather than back on the strip.
#[inline]
pub fn lands_in_world(pos: Vec2, tuning: &Tuning) -> bool {
    pos.x > tuning.menu_width + tuning.ghost_place_margin
}

/// Where a released ghost spawns: its position pulled `spawn_edge_inset`
/// inside every viewport edge.
pub fn spawn_position(pos: Vec2, viewport: Viewport, tuning: &Tuning) -> Vec2 {
    let inset = tuning.spawn_edge_inset;
    Vec2::new(
        crate::geometry::clamp(pos.x, inset, viewport.width - inset),
        crate::geometry::clamp(pos.y, inset, viewport.height - inset),
    )
}
