//! The single mutable aggregate every frame stage works on.
//!
//! [`World::step`] runs once per processed detection, in a fixed order:
//! palette scroll, palette pick / ghost carry, item grab / drag, merge. A
//! hand's [`HandMode`] decides which stages may act on its pointer.

use glam::Vec2;

use crate::discovery::Discovered;
use crate::gesture::{HandId, Pointer};
use crate::ghost::{self, Ghost};
use crate::hands::{HandMode, HandModes};
use crate::items::{ItemId, ItemRegistry};
use crate::menu::{self, MenuScrollState};
use crate::merge::{self, MergeOutcome};
use crate::recipes::RecipeBook;
use crate::tuning::{Tuning, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub enum WorldEvent {
    ScrollStarted(HandId),
    ScrollEnded(HandId),
    GhostPicked { hand: HandId, kind: String },
    GhostPlaced { hand: HandId, item: ItemId, kind: String },
    GhostDiscarded { hand: HandId, kind: String },
    ItemGrabbed { hand: HandId, item: ItemId },
    ItemReleased { hand: HandId, item: ItemId },
    Merged(MergeOutcome),
    Discovered(String),
    HandLost(HandId),
}

pub struct World {
    pub tuning: Tuning,
    viewport: Viewport,
    items: ItemRegistry,
    recipes: RecipeBook,
    discovered: Discovered,
    scroll: MenuScrollState,
    hands: HandModes,
}

impl World {
    pub fn new(tuning: Tuning, recipes: RecipeBook, viewport: Viewport) -> Self {
        Self {
            tuning,
            viewport,
            items: ItemRegistry::new(),
            recipes,
            discovered: Discovered::with_base(),
            scroll: MenuScrollState::default(),
            hands: HandModes::default(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    pub fn discovered(&self) -> &Discovered {
        &self.discovered
    }

    pub fn scroll(&self) -> &MenuScrollState {
        &self.scroll
    }

    pub fn hand_mode(&self, hand: HandId) -> &HandMode {
        self.hands.get(hand)
    }

    pub fn ghosts(&self) -> impl Iterator<Item = &Ghost> {
        self.hands.ghosts()
    }

    /// Place a new item as a released ghost would: default radius, pulled
    /// inside the viewport edges, touched now.
    pub fn spawn_item(&mut self, kind: &str, pos: Vec2, now_ms: f64, events: &mut Vec<WorldEvent>) -> ItemId {
        let at = ghost::spawn_position(pos, self.viewport, &self.tuning);
        let id = self.items.spawn(kind, at, self.tuning.spawn_radius, now_ms);
        if self.discovered.discover(kind) {
            events.push(WorldEvent::Discovered(kind.to_owned()));
        }
        id
    }

    /// Place an item exactly at `pos` with an explicit radius.
    pub fn insert_item(&mut self, kind: &str, pos: Vec2, r: f32, now_ms: f64) -> ItemId {
        self.items.spawn(kind, pos, r, now_ms)
    }

    /// End whatever the hand was doing: a dragged item stays where it is, a
    /// carried ghost is dropped.
    pub fn hand_lost(&mut self, hand: HandId, events: &mut Vec<WorldEvent>) {
        match self.hands.take(hand) {
            HandMode::DraggingItem(item) => {
                if self.items.release(item) {
                    events.push(WorldEvent::ItemReleased { hand, item });
                }
            }
            HandMode::CarryingGhost(g) => {
                log::info!("[ghost] {} lost while carrying {}", hand, g.kind);
                events.push(WorldEvent::GhostDiscarded { hand, kind: g.kind });
            }
            HandMode::Scrolling { .. } => events.push(WorldEvent::ScrollEnded(hand)),
            HandMode::Idle => {}
        }
        self.scroll.active = self.hands.any_scrolling();
        events.push(WorldEvent::HandLost(hand));
    }

    pub fn step(&mut self, pointers: &[Pointer], now_ms: f64, events: &mut Vec<WorldEvent>) {
        for p in pointers {
            self.scroll_stage(p, events);
        }
        self.scroll.active = self.hands.any_scrolling();
        self.scroll
            .clamp(self.discovered.len(), self.viewport.height, &self.tuning);

        for p in pointers {
            self.ghost_stage(p, now_ms, events);
        }
        for p in pointers {
            self.drag_stage(p, now_ms, events);
        }
        self.merge_stage(now_ms, events);
    }

    fn scroll_stage(&mut self, p: &Pointer, events: &mut Vec<WorldEvent>) {
        let over_strip = menu::in_strip(p.pos, &self.tuning) && !p.pinch;
        match *self.hands.get(p.hand) {
            HandMode::Idle if over_strip => {
                self.hands
                    .set(p.hand, HandMode::Scrolling { last_y: p.pos.y });
                events.push(WorldEvent::ScrollStarted(p.hand));
            }
            HandMode::Scrolling { last_y } if over_strip => {
                self.scroll.drag(last_y, p.pos.y);
                self.hands
                    .set(p.hand, HandMode::Scrolling { last_y: p.pos.y });
                log::trace!("[menu] scroll offset {:.1}", self.scroll.offset);
            }
            HandMode::Scrolling { .. } => {
                self.hands.set(p.hand, HandMode::Idle);
                events.push(WorldEvent::ScrollEnded(p.hand));
            }
            _ => {}
        }
    }

    fn ghost_stage(&mut self, p: &Pointer, now_ms: f64, events: &mut Vec<WorldEvent>) {
        let mode = self.hands.get(p.hand);
        if mode.is_free() {
            if !(p.pinch && menu::in_strip(p.pos, &self.tuning)) {
                return;
            }
            let hit = menu::hit_test(&self.discovered, self.scroll.offset, p.pos.y, &self.tuning);
            let Some(kind) = hit.and_then(|i| self.discovered.get(i)).map(str::to_owned) else {
                return;
            };
            log::info!("[ghost] {} picked {}", p.hand, kind);
            self.hands.set(
                p.hand,
                HandMode::CarryingGhost(Ghost::new(kind.clone(), p.hand, p.pos)),
            );
            events.push(WorldEvent::GhostPicked { hand: p.hand, kind });
            return;
        }

        let HandMode::CarryingGhost(ghost) = mode else {
            return;
        };
        let mut ghost = ghost.clone();
        ghost.pos = p.pos;
        if !p.release {
            self.hands.set(p.hand, HandMode::CarryingGhost(ghost));
            return;
        }

        self.hands.set(p.hand, HandMode::Idle);
        if ghost::lands_in_world(p.pos, &self.tuning) {
            let item = self.spawn_item(&ghost.kind, p.pos, now_ms, events);
            log::info!("[ghost] {} placed {} as item {}", p.hand, ghost.kind, item.0);
            events.push(WorldEvent::GhostPlaced {
                hand: p.hand,
                item,
                kind: ghost.kind,
            });
        } else {
            log::debug!("[ghost] {} dropped {} back on the strip", p.hand, ghost.kind);
            events.push(WorldEvent::GhostDiscarded {
                hand: p.hand,
                kind: ghost.kind,
            });
        }
    }

    fn drag_stage(&mut self, p: &Pointer, now_ms: f64, events: &mut Vec<WorldEvent>) {
        match *self.hands.get(p.hand) {
            HandMode::CarryingGhost(_) => return,
            HandMode::DraggingItem(item) => {
                let eased = self.items.drag_toward(
                    item,
                    p.pos,
                    self.viewport,
                    self.tuning.drag_ease,
                    now_ms,
                );
                if eased.is_some() {
                    if p.release {
                        self.items.release(item);
                        self.hands.set(p.hand, HandMode::Idle);
                        log::debug!("[drag] {} released item {}", p.hand, item.0);
                        events.push(WorldEvent::ItemReleased { hand: p.hand, item });
                    }
                    return;
                }
                // the dragged item no longer exists
                self.hands.set(p.hand, HandMode::Idle);
            }
            _ => {}
        }

        if !p.closed {
            return;
        }
        if let Some(item) = self
            .items
            .try_grab(p.hand, p.pos, self.tuning.grab_reach, now_ms)
        {
            log::debug!("[drag] {} grabbed item {}", p.hand, item.0);
            self.hands.set(p.hand, HandMode::DraggingItem(item));
            events.push(WorldEvent::ItemGrabbed { hand: p.hand, item });
        }
    }

    fn merge_stage(&mut self, now_ms: f64, events: &mut Vec<WorldEvent>) {
        let Some(outcome) = merge::merge_step(
            &mut self.items,
            &self.recipes,
            &mut self.discovered,
            now_ms,
            &self.tuning,
        ) else {
            return;
        };
        let (a, b) = outcome.consumed;
        let holders: Vec<HandId> = [a, b]
            .iter()
            .filter_map(|id| self.hands.holder_of(*id))
            .collect();
        for hand in holders {
            self.hands.set(hand, HandMode::Idle);
        }
        if outcome.newly_discovered {
            events.push(WorldEvent::Discovered(outcome.kind.clone()));
        }
        events.push(WorldEvent::Merged(outcome));
    }
}
