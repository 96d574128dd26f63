//! Live items and per-hand drag ownership.
//!
//! Insertion order is significant: grabs scan newest-first so the topmost
//! (last drawn) item under a hand wins, and the merge scan walks pairs in
//! insertion order.

use glam::Vec2;

use crate::geometry::{clamp, dist};
use crate::gesture::HandId;
use crate::tuning::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub pos: Vec2,
    pub r: f32,
    pub kind: String,
    pub dragging_by: Option<HandId>,
    /// Creation or last drag contact, milliseconds on the frame clock.
    pub last_touched_ms: f64,
}

#[derive(Clone, Debug)]
pub struct ItemRegistry {
    items: Vec<Item>,
    next_id: u32,
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new unowned item on top. Ids are never reused.
    pub fn spawn(&mut self, kind: &str, pos: Vec2, r: f32, now_ms: f64) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(Item {
            id,
            pos,
            r,
            kind: kind.to_owned(),
            dragging_by: None,
            last_touched_ms: now_ms,
        });
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|it| it.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|it| it.id == id)
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|it| it.id == id)?;
        Some(self.items.remove(idx))
    }

    pub fn owned_by(&self, hand: HandId) -> Option<ItemId> {
        self.items
            .iter()
            .find(|it| it.dragging_by == Some(hand))
            .map(|it| it.id)
    }

    /// Claim the topmost unowned item within `r + reach` of `pos`.
    ///
    /// A hand that already owns an item cannot claim a second one.
    pub fn try_grab(&mut self, hand: HandId, pos: Vec2, reach: f32, now_ms: f64) -> Option<ItemId> {
        if self.owned_by(hand).is_some() {
            return None;
        }
        let it = self
            .items
            .iter_mut()
            .rev()
            .filter(|it| it.dragging_by.is_none())
            .find(|it| dist(it.pos, pos) <= it.r + reach)?;
        it.dragging_by = Some(hand);
        it.last_touched_ms = now_ms;
        Some(it.id)
    }

    /// Ease an owned item toward `target`, keeping its whole disc on screen.
    pub fn drag_toward(
        &mut self,
        id: ItemId,
        target: Vec2,
        viewport: Viewport,
        ease: f32,
        now_ms: f64,
    ) -> Option<Vec2> {
        let it = self.get_mut(id)?;
        let goal = Vec2::new(
            clamp(target.x, it.r, viewport.width - it.r),
            clamp(target.y, it.r, viewport.height - it.r),
        );
        it.pos += (goal - it.pos) * ease;
        it.last_touched_ms = now_ms;
        Some(it.pos)
    }

    /// Clear ownership; the item stays where it is.
    pub fn release(&mut self, id: ItemId) -> bool {
        match self.get_mut(id) {
            Some(it) if it.dragging_by.is_some() => {
                it.dragging_by = None;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }
}
