//! Collision-triggered crafting.
//!
//! Each frame scans every unordered pair once, in insertion order, and fires
//! at most one merge: the first colliding, recently touched pair that has a
//! recipe. Remaining pairs are looked at again next frame.

use glam::Vec2;

use crate::discovery::Discovered;
use crate::geometry::{dist, midpoint};
use crate::items::{Item, ItemId, ItemRegistry};
use crate::recipes::RecipeBook;
use crate::tuning::Tuning;

#[derive(Clone, Debug, PartialEq)]
pub struct MergeOutcome {
    pub consumed: (ItemId, ItemId),
    pub created: ItemId,
    pub kind: String,
    pub at: Vec2,
    pub newly_discovered: bool,
}

#[inline]
pub fn colliding(a: &Item, b: &Item, tuning: &Tuning) -> bool {
    dist(a.pos, b.pos) <= a.r + b.r - tuning.merge_overlap
}

/// At least one of the pair was created or dragged within the grace window.
#[inline]
pub fn recently_touched(a: &Item, b: &Item, now_ms: f64, tuning: &Tuning) -> bool {
    now_ms - a.last_touched_ms <= tuning.merge_grace_ms
        || now_ms - b.last_touched_ms <= tuning.merge_grace_ms
}

/// First eligible pair and what it turns into.
pub fn find_merge<'a>(
    items: &'a [Item],
    recipes: &'a RecipeBook,
    now_ms: f64,
    tuning: &Tuning,
) -> Option<(&'a Item, &'a Item, &'a str)> {
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if !colliding(a, b, tuning) || !recently_touched(a, b, now_ms, tuning) {
                continue;
            }
            if let Some(out) = recipes.combine(&a.kind, &b.kind) {
                return Some((a, b, out));
            }
        }
    }
    None
}

/// Run one frame of the merge engine.
pub fn merge_step(
    registry: &mut ItemRegistry,
    recipes: &RecipeBook,
    discovered: &mut Discovered,
    now_ms: f64,
    tuning: &Tuning,
) -> Option<MergeOutcome> {
    let (a, b, kind, at) = {
        let (a, b, out) = find_merge(registry.as_slice(), recipes, now_ms, tuning)?;
        (a.id, b.id, out.to_owned(), midpoint(a.pos, b.pos))
    };
    let ka = registry.remove(a).map(|it| it.kind);
    let kb = registry.remove(b).map(|it| it.kind);
    let created = registry.spawn(&kind, at, tuning.merge_radius, now_ms);
    let newly_discovered = discovered.discover(&kind);
    log::info!(
        "[merge] {} + {} -> {} at ({:.0},{:.0})",
        ka.as_deref().unwrap_or("?"),
        kb.as_deref().unwrap_or("?"),
        kind,
        at.x,
        at.y
    );
    Some(MergeOutcome {
        consumed: (a, b),
        created,
        kind,
        at,
        newly_discovered,
    })
}
