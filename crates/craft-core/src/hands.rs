//! Explicit per-hand interaction state.
//!
//! Transitions (driven by [`crate::world::World::step`]):
//!
//! - `Idle -> Scrolling`: open hand enters the palette strip.
//! - `Scrolling -> Idle`: hand pinches or leaves the strip.
//! - `Idle | Scrolling -> CarryingGhost`: pinch over a palette entry.
//! - `CarryingGhost -> Idle`: release (ghost placed or discarded).
//! - `Idle | Scrolling -> DraggingItem`: closed hand near an unowned item.
//! - `DraggingItem -> Idle`: release, the item merged away, or the hand was lost.

use fnv::FnvHashMap;

use crate::gesture::HandId;
use crate::ghost::Ghost;
use crate::items::ItemId;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum HandMode {
    #[default]
    Idle,
    Scrolling {
        last_y: f32,
    },
    CarryingGhost(Ghost),
    DraggingItem(ItemId),
}

impl HandMode {
    /// Free to start a scroll, a palette pick or a grab.
    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self, HandMode::Idle | HandMode::Scrolling { .. })
    }

    pub fn ghost(&self) -> Option<&Ghost> {
        match self {
            HandMode::CarryingGhost(g) => Some(g),
            _ => None,
        }
    }

    pub fn dragged(&self) -> Option<ItemId> {
        match self {
            HandMode::DraggingItem(id) => Some(*id),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HandMode::Idle => "idle",
            HandMode::Scrolling { .. } => "scrolling",
            HandMode::CarryingGhost(_) => "carrying",
            HandMode::DraggingItem(_) => "dragging",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HandModes {
    modes: FnvHashMap<HandId, HandMode>,
}

impl HandModes {
    pub fn get(&self, hand: HandId) -> &HandMode {
        static IDLE: HandMode = HandMode::Idle;
        self.modes.get(&hand).unwrap_or(&IDLE)
    }

    /// Store `mode` for `hand`; true when the hand changed kind of mode.
    /// A hand with no entry counts as `Idle`.
    pub fn set(&mut self, hand: HandId, mode: HandMode) -> bool {
        let next = mode.label();
        let prev = self
            .modes
            .insert(hand, mode)
            .map_or(HandMode::Idle.label(), |m| m.label());
        if prev == next {
            return false;
        }
        log::debug!("[hands] {} {} -> {}", hand, prev, next);
        true
    }

    pub fn take(&mut self, hand: HandId) -> HandMode {
        self.modes.remove(&hand).unwrap_or_default()
    }

    pub fn ghosts(&self) -> impl Iterator<Item = &Ghost> {
        self.modes.values().filter_map(HandMode::ghost)
    }

    pub fn holder_of(&self, item: ItemId) -> Option<HandId> {
        self.modes
            .iter()
            .find(|(_, m)| m.dragged() == Some(item))
            .map(|(h, _)| *h)
    }

    pub fn any_scrolling(&self) -> bool {
        self.modes
            .values()
            .any(|m| matches!(m, HandMode::Scrolling { .. }))
    }
}
