// Host-side tests for hand tracking, detection throttling and the frame pipeline.

use craft_core::error::{CraftError, Result};
use craft_core::*;
use glam::Vec2;

fn viewport() -> Viewport {
    Viewport::new(640.0, 480.0).unwrap()
}

/// Normalized landmarks for a hand whose mirrored index tip is at `tip`.
fn hand_at(tip: Vec2, d_index: f32, d_middle: f32) -> HandLandmarks {
    let vp = viewport();
    let thumb = tip + Vec2::new(d_index, 0.0);
    let mut screen = [tip; LANDMARKS_PER_HAND];
    screen[THUMB_TIP] = thumb;
    screen[MIDDLE_TIP] = thumb + Vec2::new(0.0, d_middle);
    let normalized: Vec<Vec2> = screen
        .iter()
        .map(|p| Vec2::new(1.0 - p.x / vp.width, p.y / vp.height))
        .collect();
    HandLandmarks::new(&normalized).unwrap()
}

fn fist_at(x: f32, y: f32) -> HandLandmarks {
    hand_at(Vec2::new(x, y), 30.0, 40.0)
}

fn open_at(x: f32, y: f32) -> HandLandmarks {
    hand_at(Vec2::new(x, y), 120.0, 140.0)
}

/// Replays canned detections and counts how often it was asked.
struct Canned {
    frames: Vec<Result<Vec<HandLandmarks>>>,
    calls: usize,
}

impl LandmarkSource for Canned {
    fn detect(&mut self, _now_ms: f64) -> Result<Vec<HandLandmarks>> {
        self.calls += 1;
        if self.frames.is_empty() {
            return Ok(Vec::new());
        }
        self.frames.remove(0)
    }
}

fn pipeline() -> FramePipeline {
    FramePipeline::new(World::new(Tuning::default(), RecipeBook::classic(), viewport()))
}

#[test]
fn tracker_keeps_ids_when_detections_swap_order() {
    let mut tracker = HandTracker::new(&Tuning::default());
    let mut lost = Vec::new();
    let ids = tracker.assign(&[Vec2::new(100.0, 100.0), Vec2::new(500.0, 100.0)], &mut lost);
    assert_eq!(ids.as_slice(), &[HandId(0), HandId(1)]);

    let ids = tracker.assign(&[Vec2::new(505.0, 110.0), Vec2::new(95.0, 105.0)], &mut lost);
    assert_eq!(ids.as_slice(), &[HandId(1), HandId(0)]);
    assert!(lost.is_empty());
}

#[test]
fn tracker_drops_hands_after_missed_detections() {
    let mut tracker = HandTracker::new(&Tuning::default());
    let mut lost = Vec::new();
    tracker.assign(&[Vec2::new(100.0, 100.0), Vec2::new(500.0, 100.0)], &mut lost);
    for _ in 0..HAND_LOST_AFTER {
        tracker.assign(&[Vec2::new(100.0, 100.0)], &mut lost);
    }
    assert!(lost.is_empty());
    assert_eq!(tracker.tracked_len(), 2);

    tracker.assign(&[Vec2::new(100.0, 100.0)], &mut lost);
    assert_eq!(lost, vec![HandId(1)]);
    assert_eq!(tracker.tracked_len(), 1);

    // a returning hand gets a fresh id
    let ids = tracker.assign(&[Vec2::new(100.0, 100.0), Vec2::new(500.0, 100.0)], &mut lost);
    assert_eq!(ids.as_slice(), &[HandId(0), HandId(2)]);
}

#[test]
fn tracker_treats_a_long_jump_as_a_new_hand() {
    let mut tracker = HandTracker::new(&Tuning::default());
    let mut lost = Vec::new();
    tracker.assign(&[Vec2::new(100.0, 100.0)], &mut lost);
    let ids = tracker.assign(&[Vec2::new(100.0 + HAND_MATCH_DIST + 1.0, 100.0)], &mut lost);
    assert_eq!(ids.as_slice(), &[HandId(1)]);
    assert_eq!(tracker.tracked_len(), 2);
}

#[test]
fn throttle_spaces_detections() {
    let mut th = DetectionThrottle::new(DETECT_INTERVAL_MS);
    assert!(th.ready(0.0));
    assert!(!th.ready(10.0));
    assert!(th.ready(33.0));
    assert!(!th.ready(50.0));
    assert!(th.ready(66.0));
}

#[test]
fn frames_between_detections_leave_the_world_alone() {
    let mut p = pipeline();
    let mut src = Canned {
        frames: vec![Ok(vec![open_at(300.0, 200.0)])],
        calls: 0,
    };
    let mut events = Vec::new();
    assert!(p.frame(0.0, viewport(), &mut src, &mut events));
    assert!(!p.frame(16.0, viewport(), &mut src, &mut events));
    assert_eq!(src.calls, 1);
    // last hands are still drawn
    assert_eq!(p.hands().len(), 1);
}

#[test]
fn detector_errors_skip_the_frame() {
    let mut p = pipeline();
    let mut src = Canned {
        frames: vec![Err(CraftError::Detector("model not ready".into()))],
        calls: 0,
    };
    let mut events = Vec::new();
    assert!(!p.frame(0.0, viewport(), &mut src, &mut events));
    assert!(events.is_empty());
    assert!(p.hands().is_empty());
}

#[test]
fn extra_hands_are_ignored() {
    let mut p = pipeline();
    let mut events = Vec::new();
    let hands = [open_at(300.0, 100.0), open_at(450.0, 300.0), open_at(600.0, 450.0)];
    p.process(&hands, 0.0, &mut events);
    assert_eq!(p.hands().len(), MAX_HANDS);
}

#[test]
fn vanished_hand_lets_go_of_its_item() {
    let mut p = pipeline();
    let mut events = Vec::new();
    let id = p
        .world_mut()
        .insert_item("Stone", Vec2::new(300.0, 300.0), SPAWN_RADIUS, 0.0);
    p.process(&[fist_at(300.0, 300.0)], 1000.0, &mut events);
    assert_eq!(p.world().items().get(id).unwrap().dragging_by, Some(HandId(0)));

    events.clear();
    for i in 0..=HAND_LOST_AFTER {
        p.process(&[], 1040.0 + 40.0 * i as f64, &mut events);
    }
    assert_eq!(p.world().items().get(id).unwrap().dragging_by, None);
    assert!(events.contains(&WorldEvent::HandLost(HandId(0))));
    assert!(p.hands().is_empty());
}

#[test]
fn scene_draws_tracked_hands() {
    let mut p = pipeline();
    let mut events = Vec::new();
    p.process(&[open_at(300.0, 200.0)], 0.0, &mut events);
    let list = p.scene();
    let lines = list
        .iter()
        .filter(|c| matches!(c, DrawCmd::Line { .. }))
        .count();
    assert_eq!(lines, draw::HAND_BONES.len());
}

#[test]
fn skeleton_view_draws_bones_and_glows_per_hand() {
    let screen = open_at(300.0, 200.0).to_screen(viewport());
    let list = draw::skeleton_scene(&[screen.clone(), screen]);
    let per_hand = draw::HAND_BONES.len() + draw::PALM_BONES.len() + 2 * LANDMARKS_PER_HAND;
    assert_eq!(list.len(), 1 + 2 * per_hand);
    assert_eq!(list.cmds[0], DrawCmd::MirroredVideo);
}
