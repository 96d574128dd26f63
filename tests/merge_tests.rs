// Host-side tests for the recipe table, discovery list and merge engine.

use craft_core::merge::{find_merge, merge_step};
use craft_core::*;
use glam::Vec2;

fn registry_with(items: &[(&str, f32, f32, f64)]) -> ItemRegistry {
    let mut reg = ItemRegistry::new();
    for &(kind, x, y, touched) in items {
        reg.spawn(kind, Vec2::new(x, y), SPAWN_RADIUS, touched);
    }
    reg
}

#[test]
fn recipes_are_symmetric() {
    let book = RecipeBook::classic();
    assert_eq!(book.len(), 7);
    for (a, b, out) in book.iter() {
        assert_eq!(book.combine(a, b), Some(out));
        assert_eq!(book.combine(b, a), Some(out));
    }
    assert_eq!(book.combine("Water", "Fire"), Some("Steam"));
    assert_eq!(book.combine("Earth", "Earth"), Some("Stone"));
    assert_eq!(book.combine("Stone", "Iron"), None);
    assert_eq!(book.combine("Fire", "Fire"), None);
}

#[test]
fn custom_recipe_books() {
    let book = RecipeBook::from_entries([("Ice", "Fire", "Water")]);
    assert_eq!(book.combine("Fire", "Ice"), Some("Water"));
    assert!(RecipeBook::default().is_empty());
}

#[test]
fn discovery_is_append_only_newest_first() {
    let mut d = Discovered::with_base();
    assert_eq!(d.iter().collect::<Vec<_>>(), BASE_ITEMS.to_vec());
    assert!(!d.discover("Fire"));
    assert_eq!(d.len(), 4);

    assert!(d.discover("Steam"));
    assert!(d.discover("Cloud"));
    assert!(!d.discover("Steam"));
    assert_eq!(
        d.iter().collect::<Vec<_>>(),
        vec!["Cloud", "Steam", "Fire", "Water", "Earth", "Air"]
    );
}

#[test]
fn collision_uses_the_overlap_margin() {
    let t = Tuning::default();
    let limit = 2.0 * SPAWN_RADIUS - MERGE_OVERLAP;
    let reg = registry_with(&[("Fire", 100.0, 100.0, 0.0), ("Water", 100.0 + limit, 100.0, 0.0)]);
    let items = reg.as_slice();
    assert!(merge::colliding(&items[0], &items[1], &t));

    let reg = registry_with(&[("Fire", 100.0, 100.0, 0.0), ("Water", 101.0 + limit, 100.0, 0.0)]);
    let items = reg.as_slice();
    assert!(!merge::colliding(&items[0], &items[1], &t));
}

#[test]
fn grace_window_needs_one_fresh_item() {
    let t = Tuning::default();
    let book = RecipeBook::classic();
    let reg = registry_with(&[("Fire", 100.0, 100.0, 0.0), ("Water", 120.0, 100.0, 1000.0)]);
    // Fire is stale but Water was touched just now
    assert!(find_merge(reg.as_slice(), &book, 1000.0 + MERGE_GRACE_MS, &t).is_some());
    assert!(find_merge(reg.as_slice(), &book, 1001.0 + MERGE_GRACE_MS, &t).is_none());
}

#[test]
fn one_merge_per_frame() {
    let t = Tuning::default();
    let book = RecipeBook::classic();
    let mut discovered = Discovered::with_base();
    let mut reg = registry_with(&[
        ("Fire", 100.0, 100.0, 0.0),
        ("Water", 130.0, 100.0, 0.0),
        ("Earth", 300.0, 300.0, 0.0),
        ("Earth", 320.0, 300.0, 0.0),
    ]);

    let first = merge_step(&mut reg, &book, &mut discovered, 10.0, &t).unwrap();
    assert_eq!(first.kind, "Steam");
    assert_eq!(first.consumed, (ItemId(1), ItemId(2)));
    assert_eq!(reg.len(), 3);

    let second = merge_step(&mut reg, &book, &mut discovered, 20.0, &t).unwrap();
    assert_eq!(second.kind, "Stone");
    assert!(second.newly_discovered);
    assert_eq!(second.at, Vec2::new(310.0, 300.0));

    assert!(merge_step(&mut reg, &book, &mut discovered, 30.0, &t).is_none());
    let kinds: Vec<_> = reg.iter().map(|it| it.kind.as_str()).collect();
    assert_eq!(kinds, vec!["Steam", "Stone"]);
    assert_eq!(discovered.get(0), Some("Stone"));
    assert_eq!(discovered.get(1), Some("Steam"));
}

#[test]
fn repeat_result_is_not_rediscovered() {
    let t = Tuning::default();
    let book = RecipeBook::classic();
    let mut discovered = Discovered::with_base();
    discovered.discover("Steam");
    let mut reg = registry_with(&[("Fire", 100.0, 100.0, 0.0), ("Water", 110.0, 100.0, 0.0)]);
    let out = merge_step(&mut reg, &book, &mut discovered, 5.0, &t).unwrap();
    assert!(!out.newly_discovered);
    assert_eq!(discovered.len(), 5);
}

#[test]
fn merged_item_gets_a_fresh_id() {
    let t = Tuning::default();
    let book = RecipeBook::classic();
    let mut discovered = Discovered::with_base();
    let mut reg = registry_with(&[("Fire", 100.0, 100.0, 0.0), ("Water", 110.0, 100.0, 0.0)]);
    let out = merge_step(&mut reg, &book, &mut discovered, 5.0, &t).unwrap();
    assert_eq!(out.created, ItemId(3));
    let steam = reg.get(out.created).unwrap();
    assert_eq!(steam.r, MERGE_RADIUS);
    assert_eq!(steam.last_touched_ms, 5.0);
    assert!(reg.get(ItemId(1)).is_none());
}

#[test]
fn grab_prefers_the_topmost_item() {
    let mut reg = registry_with(&[("Fire", 100.0, 100.0, 0.0), ("Water", 110.0, 100.0, 0.0)]);
    let got = reg.try_grab(HandId(0), Vec2::new(105.0, 100.0), GRAB_REACH, 50.0);
    assert_eq!(got, Some(ItemId(2)));
    assert_eq!(reg.get(ItemId(2)).unwrap().last_touched_ms, 50.0);

    // a hand holds at most one item
    assert_eq!(reg.try_grab(HandId(0), Vec2::new(100.0, 100.0), GRAB_REACH, 60.0), None);
    // another hand gets the next one down
    assert_eq!(
        reg.try_grab(HandId(1), Vec2::new(105.0, 100.0), GRAB_REACH, 60.0),
        Some(ItemId(1))
    );
    assert_eq!(reg.owned_by(HandId(1)), Some(ItemId(1)));
}

#[test]
fn drag_keeps_the_disc_on_screen() {
    let vp = Viewport::new(640.0, 480.0).unwrap();
    let mut reg = registry_with(&[("Fire", 100.0, 100.0, 0.0)]);
    reg.try_grab(HandId(0), Vec2::new(100.0, 100.0), GRAB_REACH, 0.0);
    let pos = reg
        .drag_toward(ItemId(1), Vec2::new(-100.0, 1000.0), vp, 1.0, 10.0)
        .unwrap();
    assert_eq!(pos, Vec2::new(SPAWN_RADIUS, 480.0 - SPAWN_RADIUS));

    assert!(reg.release(ItemId(1)));
    assert!(!reg.release(ItemId(1)));
    assert!(reg.drag_toward(ItemId(9), Vec2::ZERO, vp, 1.0, 10.0).is_none());
}
